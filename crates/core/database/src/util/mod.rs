pub mod bridge;
pub mod permissions;
pub mod reference;

#[cfg(test)]
pub mod test_fixtures;
