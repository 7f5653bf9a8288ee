use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use wgpu::util::{DeviceExt, TextureDataOrder};

/// Channel layout requested for a loaded image.
///
/// Both are stored as RGBA8 on the GPU; `Rgb` forces alpha to opaque.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorFormat {
    Rgb,
    Rgba,
}

/// Sampled 2D texture with its own view and sampler.
pub struct Texture {
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    size: (u32, u32),
    loaded: bool,
}

impl Texture {
    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Loads an image file into a mipmapped texture.
    ///
    /// Images are flipped vertically so that `v = 0` is the bottom row. On a
    /// missing or undecodable file a warning is logged and an uninitialized
    /// 1x1 texture is returned instead.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
        format: ColorFormat,
    ) -> Self {
        let path = path.as_ref();
        match decode(path, format) {
            Ok(image) => {
                log::debug!("loaded texture {} ({}x{})", path.display(), image.width(), image.height());
                Self::from_image(device, queue, path, image)
            }
            Err(e) => {
                log::warn!("Failed to load texture: {e:#}");
                Self::uninitialized(device)
            }
        }
    }

    fn from_image(device: &wgpu::Device, queue: &wgpu::Queue, path: &Path, image: RgbaImage) -> Self {
        let size = image.dimensions();
        let levels = build_mip_chain(image);
        let data: Vec<u8> = levels.iter().flat_map(|l| l.as_raw().iter().copied()).collect();
        let label = path.display().to_string();

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(&label),
                size: wgpu::Extent3d {
                    width: size.0,
                    height: size.1,
                    depth_or_array_layers: 1,
                },
                mip_level_count: levels.len() as u32,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: Self::FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            TextureDataOrder::LayerMajor,
            &data,
        );

        Self::with_texture(device, &texture, size, true)
    }

    /// 1x1 texture with device-default contents.
    fn uninitialized(device: &wgpu::Device) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("glimpse unloaded texture"),
            size: wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        Self::with_texture(device, &texture, (1, 1), false)
    }

    fn with_texture(device: &wgpu::Device, texture: &wgpu::Texture, size: (u32, u32), loaded: bool) -> Self {
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("glimpse texture sampler"),
            address_mode_u: wgpu::AddressMode::MirrorRepeat,
            address_mode_v: wgpu::AddressMode::MirrorRepeat,
            address_mode_w: wgpu::AddressMode::MirrorRepeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        Self {
            view,
            sampler,
            size,
            loaded,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// `false` when the image failed to load.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Reads `path` into bottom-up RGBA8 rows.
fn decode(path: &Path, format: ColorFormat) -> Result<RgbaImage> {
    let image = image::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut rgba = image.to_rgba8();
    imageops::flip_vertical_in_place(&mut rgba);

    if format == ColorFormat::Rgb {
        for px in rgba.pixels_mut() {
            px.0[3] = u8::MAX;
        }
    }

    Ok(rgba)
}

/// Number of levels in a full mip chain down to 1x1.
fn mip_level_count(width: u32, height: u32) -> u32 {
    u32::BITS - width.max(height).max(1).leading_zeros()
}

/// Base level followed by successively halved levels down to 1x1.
fn build_mip_chain(base: RgbaImage) -> Vec<RgbaImage> {
    let count = mip_level_count(base.width(), base.height());
    let mut levels = Vec::with_capacity(count as usize);
    levels.push(base);

    for _ in 1..count {
        let Some(prev) = levels.last() else { break };
        let w = (prev.width() / 2).max(1);
        let h = (prev.height() / 2).max(1);
        let next = imageops::resize(prev, w, h, FilterType::Triangle);
        levels.push(next);
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn temp_png(name: &str, image: &RgbaImage) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("glimpse-{}-{name}.png", std::process::id()));
        image.save(&path).unwrap();
        path
    }

    // ── mip chain ─────────────────────────────────────────────────────────

    #[test]
    fn mip_count_reaches_one_pixel() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(512, 512), 10);
        assert_eq!(mip_level_count(512, 256), 10);
        assert_eq!(mip_level_count(3, 1), 2);
    }

    #[test]
    fn chain_halves_each_level_and_clamps_at_one() {
        let levels = build_mip_chain(RgbaImage::new(8, 2));
        let sizes: Vec<_> = levels.iter().map(|l| l.dimensions()).collect();
        assert_eq!(sizes, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    // ── decode ────────────────────────────────────────────────────────────

    #[test]
    fn decode_flips_rows() {
        let mut img = RgbaImage::new(1, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        let path = temp_png("flip", &img);

        let out = decode(&path, ColorFormat::Rgba).unwrap();
        assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(out.get_pixel(0, 1), &Rgba([255, 0, 0, 255]));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn rgb_format_drops_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 40]));
        let path = temp_png("rgb", &img);

        let out = decode(&path, ColorFormat::Rgb).unwrap();
        assert!(out.pixels().all(|p| p.0 == [10, 20, 30, 255]));
        let out = decode(&path, ColorFormat::Rgba).unwrap();
        assert!(out.pixels().all(|p| p.0 == [10, 20, 30, 40]));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_error_naming_the_path() {
        let err = decode(Path::new("textures/does-not-exist.png"), ColorFormat::Rgb).unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist.png"));
    }
}
