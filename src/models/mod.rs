//! Core data models for the HR operations engine.
//!
//! This module contains all the domain records used throughout the engine.
//! Every persisted record carries a store-assigned `id` and `created_at`;
//! the `New*` structs describe the fields a caller supplies on creation and
//! the `*Patch` structs the fields an update may change.

mod attendance;
mod company;
mod employee;
mod leave;
mod salary;

pub use attendance::{Attendance, AttendancePatch, AttendanceStatus, NewAttendance};
pub use company::{Company, CompanyPatch, NewCompany};
pub use employee::{Employee, EmployeePatch, EmployeeRole, EmployeeStatus, NewEmployee};
pub use leave::{
    LeaveBalance, LeaveBalancePatch, LeaveRequest, LeaveRequestPatch, LeaveStatus, LeaveType,
    NewLeaveBalance, NewLeaveRequest,
};
pub use salary::{ComponentKind, NewSalary, Salary, SalaryComponent, SalaryStructure, WageType};
