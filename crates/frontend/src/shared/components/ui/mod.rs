pub mod badge;
pub mod button;
pub mod file_input;
pub mod input;
pub mod label;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use file_input::{selected_file, FileInput};
pub use input::{parse_number, to_count, to_optional, Input, NumberInput};
pub use label::FieldLabel;
pub use select::Select;
pub use textarea::Textarea;
