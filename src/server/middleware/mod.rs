//! Request guards.

pub mod auth;

#[cfg(test)]
mod test;
