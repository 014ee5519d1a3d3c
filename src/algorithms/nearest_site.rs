//! Nearest-site assignment.
//!
//! Only the brute-force sweep is provided. A Fortune sweep or a k-d tree over
//! the sites would bring a render down from O(cells × sites), at the cost of
//! rebuilding the index whenever a site is added.
pub mod naive;
