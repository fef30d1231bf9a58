/*
    Trig Tutor, sine, cosine and tangent on the unit circle
    Copyright (C) 2024 Trig Tutor contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, RgbImage};
use snafu::prelude::*;
use std::io::Cursor;

use super::{BufferSnafu, EncodingSnafu, RenderError};

pub const PNG_MIME: &str = "image/png";

/// An encoded raster image, produced and consumed within a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    /// MIME type of `bytes`
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl RenderedImage {
    /// Encodes a packed RGB buffer as PNG.
    pub(crate) fn encode_png(rgb: Vec<u8>, width: u32, height: u32) -> Result<Self, RenderError> {
        let pixels = RgbImage::from_raw(width, height, rgb).context(BufferSnafu { width, height })?;

        let mut bytes = Vec::new();
        pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context(EncodingSnafu)?;

        Ok(Self {
            width,
            height,
            mime: PNG_MIME,
            bytes,
        })
    }

    /// Standard base64 of the encoded image, suitable for JSON payloads.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// The image as a `data:` URI, ready for an `<img src=...>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.to_base64())
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[test]
fn test_encode_png() {
    let (width, height) = (4, 2);
    let rgb = vec![255_u8; (width * height * 3) as usize];
    let img = RenderedImage::encode_png(rgb, width, height).unwrap();
    assert!(!img.is_empty());
    // PNG signature
    assert_eq!(&img.bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    assert!(img.data_uri().starts_with("data:image/png;base64,iVBORw0KGgo"));

    let decoded = STANDARD.decode(img.to_base64()).unwrap();
    assert_eq!(decoded, img.bytes);

    // Buffer too short for the requested size
    assert!(matches!(
        RenderedImage::encode_png(vec![0; 5], width, height),
        Err(RenderError::Buffer { .. })
    ));
}
