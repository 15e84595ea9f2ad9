pub mod analysis;
pub mod health;
pub mod history;
pub mod insights;
pub mod products;
pub mod server;

#[cfg(test)]
pub mod test;
