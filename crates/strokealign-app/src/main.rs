//! Native entry point: runs every operator against a small demo scene.

#[cfg(feature = "native")]
fn main() {
    use glam::DVec3;
    use kurbo::{Point, Rect};
    use strokealign_app::{App, AppConfig, EditMode, Editor, ObjectData, OperatorKind, Scene, SceneObject};
    use strokealign_core::annotation::AnnotationStroke;
    use strokealign_core::entities::{Armature, BezierPoint, Curve, EditBone, Mesh, Spline, UvMap};
    use strokealign_core::{Influence, ViewportProjector};

    env_logger::init();
    log::info!("Starting StrokeAlign");

    let mut scene = Scene::new();
    scene.viewport = Some(ViewportProjector::perspective(
        DVec3::new(0.0, -8.0, 4.0),
        DVec3::ZERO,
        DVec3::Z,
        50_f64.to_radians(),
        Rect::new(0.0, 0.0, 1280.0, 800.0),
    ));
    // A gentle arc drawn across the view.
    scene.annotations.push_stroke(AnnotationStroke::new(
        (0..=8)
            .map(|i| {
                let x = -2.0 + i as f64 * 0.5;
                DVec3::new(x, 0.0, 1.0 - 0.1 * x * x)
            })
            .collect(),
    ));
    scene.uv_annotations.push_stroke(AnnotationStroke::new(vec![
        DVec3::new(0.0, 0.9, 0.0),
        DVec3::new(1.0, 0.9, 0.0),
    ]));

    let mut mesh = Mesh::new();
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let indices = corners
        .iter()
        .map(|&(x, y)| mesh.add_vertex(DVec3::new(x, y, 0.0)))
        .collect();
    mesh.add_face(indices);
    mesh.recalc_normals();
    mesh.select_all(true);
    let mut uv_map = UvMap::new("UVMap");
    for &(x, y) in &corners {
        uv_map.push(Point::new((x + 1.0) * 0.5, (y + 1.0) * 0.4), true);
    }
    let mut plane = SceneObject::new("Plane", ObjectData::Mesh(mesh));
    plane.uv_map = Some(uv_map);
    let plane = scene.add_object(plane);

    let mut bezier = BezierPoint::new(DVec3::new(0.5, 0.0, 0.0));
    bezier.select_control_point = true;
    let curve = scene.add_object(SceneObject::new(
        "Curve",
        ObjectData::Curve(Curve {
            splines: vec![Spline::Bezier(vec![bezier])],
        }),
    ));

    let mut bone = EditBone::new("Bone", DVec3::new(-0.5, 0.0, 0.0), DVec3::new(0.5, 0.0, 0.5));
    bone.select = true;
    let rig = scene.add_object(SceneObject::new("Rig", ObjectData::Armature(Armature { bones: vec![bone] })));

    let mut app = App::new(scene, AppConfig::default());
    for item in app.keymap().items() {
        log::info!("{:36} {}", item.operator.idname(), item.format());
    }

    let runs = [
        (plane, EditMode::Edit, Editor::Viewport3D, OperatorKind::Mesh),
        (plane, EditMode::Edit, Editor::UvEditor, OperatorKind::Uv),
        (curve, EditMode::Edit, Editor::Viewport3D, OperatorKind::Curve),
        (rig, EditMode::Edit, Editor::Viewport3D, OperatorKind::Armature),
        (rig, EditMode::Object, Editor::Viewport3D, OperatorKind::Object),
        // Wrong mode on purpose.
        (rig, EditMode::Object, Editor::Viewport3D, OperatorKind::Mesh),
    ];
    for (index, mode, editor, operator) in runs {
        app.scene.set_active(index);
        app.scene.mode = mode;
        app.editor = editor;
        let outcome = app.run(operator);
        log::info!("{} -> {:?}", operator.label(), outcome);
    }

    app.set_influence(Influence::clamped(0.5));
    app.scene.set_active(plane);
    app.scene.mode = EditMode::Edit;
    app.editor = Editor::Viewport3D;
    let outcome = app.run(OperatorKind::Mesh);
    log::info!("Half influence pass -> {:?}", outcome);

    app.shutdown();
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
