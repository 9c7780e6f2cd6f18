//! Re-derives "which of this vendor's products were ordered, and by whom"
//! from the durable order records. Order lines carry only a soft product
//! reference, so the join goes catalog → lines → parent orders.

use std::collections::BTreeMap;

use crate::domain::errors::DomainError;
use crate::domain::order::{OrderLine, VendorOrderView};
use crate::domain::ports::{CatalogStore, OrderStore};

/// Returns one view per distinct order containing at least one of the
/// vendor's products, carrying only that vendor's lines. An order may mix
/// products from several vendors; each vendor sees just their own subset.
///
/// A line group whose parent order cannot be found is skipped rather than
/// raised: reads stay tolerant of gaps between line and order records.
pub fn orders_for_vendor<S>(
    store: &mut S,
    vendor_id: i64,
) -> Result<Vec<VendorOrderView>, DomainError>
where
    S: CatalogStore + OrderStore,
{
    let products = store.products_by_vendor(vendor_id)?;
    if products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    let lines = store.lines_by_product_ids(&product_ids)?;

    // BTreeMap keys keep the result ordered by order id, so repeated reads
    // with no intervening writes are identical.
    let mut lines_by_order: BTreeMap<i64, Vec<OrderLine>> = BTreeMap::new();
    for line in lines {
        lines_by_order.entry(line.order_id).or_default().push(line);
    }

    let mut views = Vec::with_capacity(lines_by_order.len());
    for (order_id, vendor_lines) in lines_by_order {
        let Some(order) = store.order_by_id(order_id)? else {
            log::warn!(
                "skipping {} order line(s) with missing parent order {}",
                vendor_lines.len(),
                order_id
            );
            continue;
        };

        views.push(VendorOrderView {
            order_id: order.id,
            buyer_id: order.buyer_id,
            shipping: order.shipping,
            total: order.total,
            quantity: order.quantity,
            payment_status: order.payment_status,
            payment_reference: order.payment_reference,
            purchased_at: order.purchased_at,
            lines: vendor_lines,
        });
    }

    Ok(views)
}
