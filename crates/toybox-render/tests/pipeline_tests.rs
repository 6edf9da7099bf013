// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod support;

use std::sync::atomic::Ordering;

use glam::Vec3;
use toybox_render::{Display, GraphicsPipeline, RenderPass, ResourceCache};

use toybox_core::graphics::{GraphicsContextProvider, RenderError, RenderingApi, TextureFormat};
use toybox_core::math::{RgbaColor, Size};
use toybox_core::stage::SharedStage;

use support::{camera_toy, quad_toy, stage_with, CallLog, MockBackend, MockContextProvider, MockSurface};

fn ready_display(log: &CallLog) -> Display {
    let surface = MockSurface::new(Size::new(1920, 1080));
    let provider = MockContextProvider::new(RenderingApi::OpenGL, log.clone());
    let mut display = Display::new(surface);
    let context = provider.provide(display.surface());
    display.set_context(context);
    display
}

fn scene_with_both_materials() -> SharedStage {
    stage_with(vec![
        quad_toy("opaque", Vec3::new(0.0, 0.0, 5.0), TextureFormat::Rgb),
        quad_toy("translucent", Vec3::new(1.0, 0.0, 5.0), TextureFormat::Rgba),
        camera_toy(),
    ])
}

#[test]
fn empty_pass_list_is_rejected() {
    match GraphicsPipeline::new(Vec::new()) {
        Err(RenderError::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn materials_route_to_passes_and_depth_toggles_around_transparent() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    let display = ready_display(&log);
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::with_default_passes();

    pipeline
        .draw(
            backend.as_ref(),
            &mut cache,
            &display,
            &[scene_with_both_materials()],
            RgbaColor::BLACK,
        )
        .expect("draw");

    let sequence: Vec<String> = log
        .entries()
        .into_iter()
        .filter(|entry| entry.starts_with("depth_test") || entry.starts_with("draw_mesh"))
        .collect();
    assert_eq!(
        sequence,
        vec![
            "depth_test:on",
            "draw_mesh:6",
            "depth_test:off",
            "draw_mesh:6",
            "depth_test:on",
        ]
    );
}

#[test]
fn frame_framing_runs_in_order() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    let display = ready_display(&log);
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::with_default_passes();

    pipeline
        .draw(
            backend.as_ref(),
            &mut cache,
            &display,
            &[scene_with_both_materials()],
            RgbaColor::BLACK,
        )
        .expect("draw");

    let entries = log.entries();
    let position = |needle: &str| {
        entries
            .iter()
            .position(|entry| entry == needle)
            .unwrap_or_else(|| panic!("missing '{needle}' in {entries:?}"))
    };

    assert!(position("make_current") < position("begin_draw"));
    assert!(position("begin_draw") < position("set_viewport"));
    assert!(position("set_viewport") < position("clear"));
    assert!(position("clear") < position("end_draw"));
    assert!(position("end_draw") < position("swap_buffers"));
}

#[test]
fn resources_upload_once_across_frames() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    let display = ready_display(&log);
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::with_default_passes();
    let stage = scene_with_both_materials();

    for _ in 0..3 {
        pipeline
            .draw(
                backend.as_ref(),
                &mut cache,
                &display,
                &[stage.clone()],
                RgbaColor::BLACK,
            )
            .expect("draw");
    }

    // Two distinct meshes, textures, and programs; each uploaded once.
    assert_eq!(log.count_of("upload_mesh:"), 2);
    assert_eq!(log.count_of("upload_texture:"), 2);
    assert_eq!(log.count_of("create_program:"), 2);
    assert_eq!(log.count_of("draw_mesh:"), 6);
}

#[test]
fn cache_clear_is_idempotent_and_forces_reupload() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    let display = ready_display(&log);
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::with_default_passes();
    let stage = scene_with_both_materials();

    pipeline
        .draw(backend.as_ref(), &mut cache, &display, &[stage.clone()], RgbaColor::BLACK)
        .expect("draw");
    assert!(!cache.is_empty());

    cache.clear();
    cache.clear();
    assert!(cache.is_empty());

    pipeline
        .draw(backend.as_ref(), &mut cache, &display, &[stage], RgbaColor::BLACK)
        .expect("draw");
    assert_eq!(log.count_of("upload_mesh:"), 4);
}

#[test]
fn unmatched_material_is_dropped_without_failing_the_frame() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    let display = ready_display(&log);
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::new(vec![RenderPass::new(
        "nothing",
        true,
        |_material| false,
    )])
    .expect("pipeline");

    pipeline
        .draw(
            backend.as_ref(),
            &mut cache,
            &display,
            &[scene_with_both_materials()],
            RgbaColor::BLACK,
        )
        .expect("draw");

    assert_eq!(log.count_of("draw_mesh:"), 0);
    assert_eq!(log.count_of("end_draw"), 1);
}

#[test]
fn overlapping_pass_filters_route_to_the_first_match() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    let display = ready_display(&log);
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::new(vec![
        RenderPass::new("first", true, |_material| true),
        RenderPass::new("second", false, |_material| true),
    ])
    .expect("pipeline");

    pipeline
        .draw(
            backend.as_ref(),
            &mut cache,
            &display,
            &[stage_with(vec![
                quad_toy("quad", Vec3::new(0.0, 0.0, 5.0), TextureFormat::Rgb),
                camera_toy(),
            ])],
            RgbaColor::BLACK,
        )
        .expect("draw");

    // Both passes accept the material, but only the first claims it.
    // The second pass stays empty, so its depth-off state never runs.
    let sequence: Vec<String> = log
        .entries()
        .into_iter()
        .filter(|entry| entry.starts_with("depth_test") || entry.starts_with("draw_mesh"))
        .collect();
    assert_eq!(
        sequence,
        vec!["depth_test:on", "draw_mesh:6", "depth_test:on"]
    );
}

#[test]
fn failed_mesh_upload_skips_draw_but_finishes_frame() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    backend.fail_mesh_uploads.store(true, Ordering::SeqCst);
    let display = ready_display(&log);
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::with_default_passes();

    pipeline
        .draw(
            backend.as_ref(),
            &mut cache,
            &display,
            &[scene_with_both_materials()],
            RgbaColor::BLACK,
        )
        .expect("draw");

    assert_eq!(log.count_of("draw_mesh:"), 0);
    assert_eq!(log.count_of("end_draw"), 1);
    assert_eq!(log.count_of("swap_buffers"), 1);
}

#[test]
fn missing_context_reports_context_lost() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    let display = Display::new(MockSurface::new(Size::new(800, 600)));
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::with_default_passes();

    match pipeline.draw(
        backend.as_ref(),
        &mut cache,
        &display,
        &[scene_with_both_materials()],
        RgbaColor::BLACK,
    ) {
        Err(RenderError::ContextLost) => {}
        other => panic!("expected ContextLost, got {other:?}"),
    }
    assert_eq!(log.count_of("begin_draw"), 0);
}

#[test]
fn program_stays_bound_for_its_segment() {
    let log = CallLog::new();
    let backend = MockBackend::new(RenderingApi::OpenGL, log.clone());
    let display = ready_display(&log);
    let mut cache = ResourceCache::new();
    let pipeline = GraphicsPipeline::with_default_passes();

    pipeline
        .draw(
            backend.as_ref(),
            &mut cache,
            &display,
            &[stage_with(vec![
                quad_toy("quad", Vec3::new(0.0, 0.0, 5.0), TextureFormat::Rgb),
                camera_toy(),
            ])],
            RgbaColor::BLACK,
        )
        .expect("draw");

    let entries = log.entries();
    let bind = entries
        .iter()
        .position(|entry| entry.starts_with("bind_program:"))
        .expect("program bound");
    let unbind = entries
        .iter()
        .position(|entry| entry.starts_with("unbind_program:"))
        .expect("program unbound");
    let draw = entries
        .iter()
        .position(|entry| entry.starts_with("draw_mesh:"))
        .expect("mesh drawn");

    assert!(bind < draw && draw < unbind);
}
