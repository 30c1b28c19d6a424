pub mod block_date_form;
pub mod booking_list;
pub mod confirm_delete_modal;
pub mod notice_banner;
pub mod stats_summary;

pub use block_date_form::BlockDateForm;
pub use booking_list::BookingList;
pub use confirm_delete_modal::ConfirmDeleteModal;
pub use notice_banner::NoticeBanner;
pub use stats_summary::StatsSummary;
