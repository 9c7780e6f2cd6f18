/// One live shopping-cart row: a (product, buyer) pair, unique per pair.
/// Quantity and price are not tracked here; they are resolved from the
/// client-side snapshot submitted at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub id: i64,
    pub product_id: i64,
    pub buyer_id: i64,
}
