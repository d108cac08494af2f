pub mod core;
pub mod prelude;
pub mod triangles;

#[cfg(test)]
mod tests;
