pub mod convert;

pub use convert::{
    convert_565_dir, convert_565_file, dither_file, output_path_for_565, output_path_for_dither,
    BatchReport,
};
