pub mod errors;
pub mod db;
pub mod sede;
pub mod auto;

#[cfg(test)]
mod tests;
