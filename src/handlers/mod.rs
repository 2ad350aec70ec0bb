//! Route handlers

pub mod home;
pub mod predict;
