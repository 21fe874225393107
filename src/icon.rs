use anyhow::Result;
use image::imageops::FilterType;
use log::debug;
use std::{fs::File, io::BufWriter, path::Path};

// 源 PNG 与输出 ICO 的固定路径
pub const SRC_PATH: &str = "build/appicon.png";
pub const DEST_PATH: &str = "build/windows/icon.ico";

// 标准 Windows 图标尺寸
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

pub fn generate() -> Result<()> {
    generate_from(Path::new(SRC_PATH), Path::new(DEST_PATH))
}

/// 从 src 生成多分辨率 ICO 写入 dest
pub fn generate_from(src: &Path, dest: &Path) -> Result<()> {
    if !src.exists() {
        println!("Source image not found: {}", src.display());
        return Ok(());
    }

    let img = image::open(src)?.into_rgba8();
    debug!("Loaded source image: {}x{}", img.width(), img.height());

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for &size in &ICON_SIZES {
        // 每个尺寸独立缩放
        let frame = image::imageops::resize(&img, size, size, FilterType::Lanczos3);
        let icon_image = ico::IconImage::from_rgba_data(size, size, frame.into_raw());
        icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image)?);
        debug!("Encoded {size}x{size} frame");
    }

    let file = BufWriter::new(File::create(dest)?);
    icon_dir.write(file)?;

    println!("Icon generated: {}", dest.display());
    Ok(())
}
