pub mod anchor_spring;

pub use anchor_spring::{AnchorRest, AnchorSpringPlugin};
