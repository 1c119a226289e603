pub mod action;
pub mod controller;
pub mod task_list;
