//! Window contents for the workspace apps.

mod employees;
mod intranet;
mod kasm;

pub use employees::AiEmployeesApp;
pub use intranet::IntranetApp;
pub use kasm::KasmApp;
