pub mod roles;
pub mod room;
pub mod scheduled_test;
pub mod staff_assignment;
pub mod staff_member;
pub mod test_type;
