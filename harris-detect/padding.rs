/// Edge-replication padding shared by the gradient, scoring, and
/// suppression stages so all three use identical boundary semantics.
///
/// Out-of-bounds samples repeat the nearest in-bounds border sample;
/// the output is `(width + 2*border) x (height + 2*border)`. The input
/// must be non-empty (callers validate dimensions before padding).
pub fn pad_edge(src: &[f32], width: usize, height: usize, border: usize) -> Vec<f32> {
    let pw = width + 2 * border;
    let ph = height + 2 * border;
    let mut out = vec![0.0f32; pw * ph];

    for y in 0..ph {
        let sy = y.saturating_sub(border).min(height - 1);
        let src_row = &src[sy * width..(sy + 1) * width];
        let out_row = &mut out[y * pw..(y + 1) * pw];
        for (x, slot) in out_row.iter_mut().enumerate() {
            let sx = x.saturating_sub(border).min(width - 1);
            *slot = src_row[sx];
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_border_is_identity() {
        let src = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let padded = pad_edge(&src, 3, 2, 0);
        assert_eq!(padded, src);
    }

    #[test]
    fn test_single_border_replicates_edges() {
        // 2x2 image:
        //   1 2
        //   3 4
        let src = vec![1.0, 2.0, 3.0, 4.0];
        let padded = pad_edge(&src, 2, 2, 1);

        #[rustfmt::skip]
        let expected = vec![
            1.0, 1.0, 2.0, 2.0,
            1.0, 1.0, 2.0, 2.0,
            3.0, 3.0, 4.0, 4.0,
            3.0, 3.0, 4.0, 4.0,
        ];
        assert_eq!(padded, expected);
    }

    #[test]
    fn test_border_larger_than_image() {
        let src = vec![7.0];
        let padded = pad_edge(&src, 1, 1, 3);
        assert_eq!(padded.len(), 49);
        assert!(padded.iter().all(|&v| v == 7.0));
    }

    #[test]
    fn test_interior_preserved() {
        let src: Vec<f32> = (0..12).map(|v| v as f32).collect();
        let border = 2;
        let padded = pad_edge(&src, 4, 3, border);
        let pw = 4 + 2 * border;
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(padded[(y + border) * pw + (x + border)], src[y * 4 + x]);
            }
        }
    }
}
