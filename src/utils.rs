use ndarray::{Array2, ArrayView1, Axis};

pub fn cosine_similarity(v1: ArrayView1<f32>, v2: ArrayView1<f32>) -> f32 {
    let dot_product = v1.dot(&v2);
    let norm1 = v1.dot(&v1).sqrt();
    let norm2 = v2.dot(&v2).sqrt();

    if norm1 == 0.0 || norm2 == 0.0 {
        0.0
    } else {
        dot_product / (norm1 * norm2)
    }
}

/// Scale every row to unit length. All-zero rows stay zero.
pub fn normalize_rows(vectors: &Array2<f32>) -> Array2<f32> {
    let mut normalized = vectors.clone();
    for mut row in normalized.axis_iter_mut(Axis(0)) {
        let magnitude = row.dot(&row).sqrt();
        if magnitude > 0.0 {
            row /= magnitude;
        }
    }
    normalized
}
