pub mod member;
pub mod member_to_look_up;
pub mod member_to_save;
pub mod membership_plan;
pub mod membership_status;
pub mod newsletter;
pub mod notification;
pub mod payment;
pub mod plan_to_save;
pub mod renewal;
