//! Contract — an engagement between a teacher and a student.

use serde::{Deserialize, Serialize};

use crate::id::{ContractId, StudentId, UserId};

/// Where a contract is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub teacher_id: UserId,
    pub student_id: StudentId,
    pub status: ContractStatus,
}
