pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod vendor_orders;

#[cfg(test)]
pub(crate) mod testing;
