//! Request guards applied by controllers.

pub mod auth;

#[cfg(test)]
mod test;
