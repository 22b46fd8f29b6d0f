use crate::padding::pad_edge;

/// Symmetric central differences over a one-pixel edge-replicated border.
///
/// Returns `(ix, iy)`, both the same extent as the input. The values carry
/// the 2x scale of the [-1, 0, 1] difference relative to a unit kernel;
/// callers must not assume unit-normalized gradients.
pub fn central_gradients(src: &[f32], width: usize, height: usize) -> (Vec<f32>, Vec<f32>) {
    let padded = pad_edge(src, width, height, 1);
    let pw = width + 2;

    let mut ix = vec![0.0f32; width * height];
    let mut iy = vec![0.0f32; width * height];

    for y in 0..height {
        let above = &padded[y * pw..(y + 1) * pw];
        let center = &padded[(y + 1) * pw..(y + 2) * pw];
        let below = &padded[(y + 2) * pw..(y + 3) * pw];
        for x in 0..width {
            let i = y * width + x;
            ix[i] = center[x + 2] - center[x];
            iy[i] = below[x + 1] - above[x + 1];
        }
    }

    (ix, iy)
}
