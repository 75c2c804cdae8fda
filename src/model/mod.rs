pub mod composites;
pub mod correlation;
pub mod descriptives;
pub mod normality;
pub mod reliability;
