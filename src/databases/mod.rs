pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PostgresDatabase;

#[cfg(test)]
pub use memory::MemoryDatabase;
