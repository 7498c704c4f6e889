//! 顶点焊接
//!
//! 把属性（位置、法线、UV）在给定精度下相同的顶点合并为一个，
//! 并丢弃合并后退化（少于 3 个不同顶点）的三角形。
//!
//! 这是网格生成之后可选的后处理步骤，生成器本身的输出从不焊接。

use std::collections::HashMap;

use super::buffer::MeshBuffers;

/// 默认比较精度：小数点后 4 位
pub const DEFAULT_PRECISION_POINTS: i32 = 4;

/// 按默认精度焊接顶点
pub fn merge_vertices(buffers: &MeshBuffers) -> MeshBuffers {
    merge_vertices_with_precision(buffers, DEFAULT_PRECISION_POINTS)
}

/// 按 `precision_points` 位小数的精度焊接顶点
///
/// 顶点按首次出现的顺序保留，输入不会被修改。
pub fn merge_vertices_with_precision(buffers: &MeshBuffers, precision_points: i32) -> MeshBuffers {
    let precision = 10f64.powi(precision_points);
    let vertex_count = buffers.vertex_count();

    let mut lookup: HashMap<[i64; 8], u32> = HashMap::with_capacity(vertex_count);
    let mut remap: Vec<u32> = Vec::with_capacity(vertex_count);
    let mut merged = MeshBuffers::with_capacity(vertex_count, buffers.index_count());

    for i in 0..vertex_count {
        let position = buffers.position(i).unwrap_or_default();
        let normal = buffers.normal(i).unwrap_or_default();
        let uv = buffers.uv(i).unwrap_or_default();

        let next = merged.vertex_count() as u32;
        let index = match quantize(&position, &normal, &uv, precision) {
            Some(key) => *lookup.entry(key).or_insert_with(|| {
                merged.push_vertex(position, normal, uv);
                next
            }),
            // 含 NaN 的顶点不与任何顶点焊接
            None => {
                merged.push_vertex(position, normal, uv);
                next
            }
        };
        remap.push(index);
    }

    let mut dropped = 0usize;
    for triangle in buffers.indices.chunks_exact(3) {
        let lookup_index = |i: u32| remap.get(i as usize).copied();
        let (Some(a), Some(b), Some(c)) = (
            lookup_index(triangle[0]),
            lookup_index(triangle[1]),
            lookup_index(triangle[2]),
        ) else {
            dropped += 1;
            continue;
        };

        if a == b || b == c || a == c {
            dropped += 1;
            continue;
        }

        merged.push_triangle(a, b, c);
    }

    crate::kernel_debug!(
        before = vertex_count,
        after = merged.vertex_count(),
        dropped_triangles = dropped,
        "Vertices merged"
    );

    merged
}

/// 量化后的比较键，任一分量为 NaN 时返回 `None`
fn quantize(position: &[f32; 3], normal: &[f32; 3], uv: &[f32; 2], precision: f64) -> Option<[i64; 8]> {
    let components = position.iter().chain(normal).chain(uv);
    if components.clone().any(|v| v.is_nan()) {
        return None;
    }

    let mut key = [0i64; 8];
    for (slot, &v) in key.iter_mut().zip(components) {
        *slot = (f64::from(v) * precision).round() as i64;
    }
    Some(key)
}
