#![allow(dead_code)]

use std::path::PathBuf;
use std::rc::Rc;

use image::{Rgb, RgbImage};
use zeyback::platform::{MemoryGdi, SharedGdi};

/// Software backend recording its calls, plus the same backend seen through the trait object
pub fn backend(width: i32, height: i32) -> (Rc<MemoryGdi>, SharedGdi) {
    let memory = Rc::new(MemoryGdi::new(width, height));
    memory.record_calls(true);
    let shared: SharedGdi = memory.clone();
    (memory, shared)
}

/// Write a bitmap fixture to the temp dir; `pixel` gives the RGB at (x, y)
pub fn write_bmp(name: &str, width: u32, height: u32, pixel: impl Fn(u32, u32) -> [u8; 3]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("zeyback-{}-{name}.bmp", std::process::id()));
    RgbImage::from_fn(width, height, |x, y| Rgb(pixel(x, y)))
        .save(&path)
        .expect("write bmp fixture");
    path
}
