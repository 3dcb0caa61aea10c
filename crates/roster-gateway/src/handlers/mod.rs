mod health;
mod records;

pub use health::health_handler;
pub use records::{
    count_records_handler, create_record_handler, get_record_by_nickname_handler,
    get_record_handler, search_records_handler,
};
