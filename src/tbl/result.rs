/// Convenience type to make error mapping cleaner at the application edges
pub type Result<T = ()> = anyhow::Result<T>;
