pub mod canonical;
pub mod frequency;
pub mod rle;
pub mod tree;

pub use canonical::build_codes_from_lengths;
pub use frequency::FrequencyTally;
pub use rle::encode_lengths;
pub use tree::build_code_lengths;
