pub mod add;
pub mod due;
pub mod list;
pub mod manage;
pub mod review;
pub mod show;
pub mod stats;
pub mod transfer;
