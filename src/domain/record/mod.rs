//! Record domain module.
//!
//! Per-session attendance and participation records. A session owns one
//! `StudentRecordList`; each `StudentRecord` points back at its student
//! by NUSNET id.

mod record_list;
mod student_record;

pub use record_list::StudentRecordList;
pub use student_record::StudentRecord;
