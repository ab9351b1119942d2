// Interactive window: drag on the canvas to paint, hold space to see canvas B.
//
// When the `demo_ui` feature is disabled (or `cli_only` is enabled), `run`
// reports that the window is unavailable.

#[cfg(all(feature = "demo_ui", not(feature = "cli_only")))]
mod imp {
    use crate::config::DemoConfig;
    use crate::error::DemoError;
    use crate::mat3::{Mat3, Vec3};
    use crate::params::{
        ROTATION_RANGE, SCALE_RANGE, SCALE_STEP, SHEAR_RANGE, SHEAR_STEP, TRANSLATION_RANGE,
        TransformParams,
    };
    use crate::sketch::{DragReport, Sketch};
    use eframe::egui;

    const HELP: &str = "cmd: reset | clear | save a|b <path.png> | help";

    struct DemoApp {
        title: String,
        sketch: Sketch,
        params: TransformParams,
        last: Option<DragReport>,
        last_pos: Option<(f64, f64)>,
        texture: Option<egui::TextureHandle>,
        shown_b: Option<bool>,
        cmd: String,
        status: String,
    }

    impl DemoApp {
        fn new(title: &str, cfg: &DemoConfig) -> Self {
            Self {
                title: title.to_owned(),
                sketch: Sketch::new(cfg),
                params: cfg.params,
                last: None,
                last_pos: None,
                texture: None,
                shown_b: None,
                cmd: String::new(),
                status: HELP.to_owned(),
            }
        }

        fn upload_if_needed(&mut self, ctx: &egui::Context, space_down: bool) {
            let toggled = self.shown_b != Some(space_down);
            let canvas = self.sketch.view_mut(space_down);
            if !canvas.take_dirty() && !toggled && self.texture.is_some() {
                return;
            }
            self.shown_b = Some(space_down);

            let im = canvas.im();
            let img = egui::ColorImage::from_rgba_unmultiplied([im.w, im.h], &im.arr);
            match &mut self.texture {
                Some(tex) => tex.set(img, egui::TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("affdraw_canvas", img, egui::TextureOptions::NEAREST))
                }
            }
        }

        fn handle_drag(&mut self, x: f64, y: f64) {
            if self.last_pos == Some((x, y)) {
                return;
            }
            self.last_pos = Some((x, y));

            match self.sketch.on_drag(x, y, &self.params) {
                Ok(report) => self.last = Some(report),
                Err(e) => {
                    log::error!("drag at ({x}, {y}) failed: {e}");
                    self.status = e.to_string();
                }
            }
        }

        fn apply_cmd(&mut self, line: &str) {
            let mut it = line.split_whitespace();
            let Some(cmd) = it.next() else {
                return;
            };

            match cmd {
                "reset" => {
                    self.params = TransformParams::default();
                    self.status = "reset params".to_owned();
                }
                "clear" => {
                    self.sketch.clear();
                    self.last = None;
                    self.status = "cleared both images".to_owned();
                }
                "save" => match (it.next(), it.next()) {
                    (Some(which @ ("a" | "b")), Some(path)) => self.save(which == "b", path),
                    _ => self.status = "usage: save a|b <path.png>".to_owned(),
                },
                "help" => {
                    self.status = HELP.to_owned();
                }
                _ => {
                    log::warn!("unknown command: {cmd}");
                    self.status = format!("unknown cmd: {cmd} (try `help`)");
                }
            }
        }

        #[cfg(feature = "im-io")]
        fn save(&mut self, b: bool, path: &str) {
            let (canvas, label) = self.sketch.view(b);
            match canvas.im().save_png(path) {
                Ok(()) => {
                    log::info!("saved {label} to {path}");
                    self.status = format!("saved {label} to {path}");
                }
                Err(e) => {
                    log::warn!("save to {path} failed: {e}");
                    self.status = format!("save failed: {e}");
                }
            }
        }

        #[cfg(not(feature = "im-io"))]
        fn save(&mut self, _b: bool, _path: &str) {
            self.status = "save needs the `im-io` feature".to_owned();
        }
    }

    fn vector_grid(ui: &mut egui::Ui, id: &str, v: Vec3) {
        egui::Grid::new(id).num_columns(3).show(ui, |ui| {
            for c in v.to_array() {
                ui.monospace(format!("{c:.3}"));
            }
            ui.end_row();
        });
    }

    fn matrix_grid(ui: &mut egui::Ui, id: &str, m: &Mat3) {
        egui::Grid::new(id).num_columns(3).show(ui, |ui| {
            for row in m.rows() {
                for c in row {
                    ui.monospace(format!("{c:.3}"));
                }
                ui.end_row();
            }
        });
    }

    impl eframe::App for DemoApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            // Typing a space into the command line must not flip the view.
            let space_down = !ctx.wants_keyboard_input() && ctx.input(|i| i.key_down(egui::Key::Space));
            self.upload_if_needed(ctx, space_down);

            egui::TopBottomPanel::top("top").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&self.title);
                    ui.separator();
                    ui.monospace(self.sketch.view(space_down).1);
                    ui.separator();
                    ui.monospace("drag to paint, hold space for image B");
                });
            });

            egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.monospace("cmd>");
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.cmd)
                            .desired_width(f32::INFINITY)
                            .hint_text("clear | save a out.png | reset"),
                    );

                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        let line = self.cmd.trim().to_owned();
                        self.cmd.clear();
                        self.apply_cmd(&line);
                    }
                });
                if !self.status.is_empty() {
                    ui.monospace(&self.status);
                }
            });

            egui::SidePanel::right("controls")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    let p = &mut self.params;
                    ui.heading("Transform");
                    ui.add(egui::Slider::new(&mut p.rotation_deg, ROTATION_RANGE).text("rotation"));
                    ui.add(egui::Slider::new(&mut p.translate_x, TRANSLATION_RANGE).text("translationX"));
                    ui.add(egui::Slider::new(&mut p.translate_y, TRANSLATION_RANGE).text("translationY"));
                    ui.add(egui::Slider::new(&mut p.scale_x, SCALE_RANGE).step_by(SCALE_STEP).text("scaleX"));
                    ui.add(egui::Slider::new(&mut p.scale_y, SCALE_RANGE).step_by(SCALE_STEP).text("scaleY"));
                    ui.label("Shear (not wired)");
                    ui.add(egui::Slider::new(&mut p.shear_x, SHEAR_RANGE).step_by(SHEAR_STEP).text("shearX"));
                    ui.add(egui::Slider::new(&mut p.shear_y, SHEAR_RANGE).step_by(SHEAR_STEP).text("shearY"));

                    ui.separator();
                    let Some(r) = &self.last else {
                        ui.label("No drag yet.");
                        return;
                    };
                    ui.label("Vector A");
                    vector_grid(ui, "vec_a", r.input);
                    ui.label("Vector B");
                    vector_grid(ui, "vec_b", r.vector_b);
                    ui.label("Matrix A");
                    matrix_grid(ui, "mat_a", &r.matrix_a);
                    ui.label("Matrix B");
                    matrix_grid(ui, "mat_b", &r.matrix_b);
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                let Some(tex) = &self.texture else { return };
                let im = self.sketch.view(space_down).0.im();

                // Render at 1:1 logical size so pointer coordinates are canvas pixels.
                let image_size = egui::vec2(im.w as f32, im.h as f32);
                let response = ui.add(egui::Image::new((tex.id(), image_size)).sense(egui::Sense::drag()));

                if response.dragged() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let x = (pos.x - response.rect.left()) as f64;
                        let y = (pos.y - response.rect.top()) as f64;
                        self.handle_drag(x, y);
                    }
                } else {
                    self.last_pos = None;
                }
            });

            ctx.request_repaint();
        }
    }

    pub fn run(title: &str, cfg: &DemoConfig) -> Result<(), DemoError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(
                cfg.width as f32 + 360.0,
                cfg.height as f32 + 120.0,
            )),
            ..Default::default()
        };

        let app = DemoApp::new(title, cfg);
        eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|e| DemoError::Ui(e.to_string()))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn app() -> DemoApp {
            let cfg = DemoConfig {
                width: 32,
                height: 32,
                ..DemoConfig::default()
            };
            DemoApp::new("test", &cfg)
        }

        #[test]
        fn reset_restores_default_params() {
            let mut app = app();
            app.params.rotation_deg = 90.0;
            app.params.scale_x = 4.0;

            app.apply_cmd("reset");
            assert_eq!(app.params, TransformParams::default());
            assert_eq!(app.status, "reset params");
        }

        #[test]
        fn clear_wipes_both_canvases_and_last_report() {
            let mut app = app();
            app.handle_drag(3.0, 4.0);
            assert!(app.last.is_some());

            app.apply_cmd("clear");
            assert!(app.last.is_none());
            for b in [false, true] {
                let canvas = app.sketch.view(b).0;
                let bg = canvas.background();
                assert!(canvas.im().arr.chunks_exact(4).all(|px| px == bg));
            }
        }

        #[test]
        fn save_with_bad_arguments_prints_usage() {
            let mut app = app();
            app.apply_cmd("save c x.png");
            assert_eq!(app.status, "usage: save a|b <path.png>");

            app.status.clear();
            app.apply_cmd("save a");
            assert_eq!(app.status, "usage: save a|b <path.png>");
        }

        #[test]
        fn unknown_command_is_reported() {
            let mut app = app();
            app.apply_cmd("frobnicate now");
            assert_eq!(app.status, "unknown cmd: frobnicate (try `help`)");

            app.apply_cmd("help");
            assert_eq!(app.status, HELP);
        }

        #[test]
        fn repeated_drag_position_is_ignored() {
            let mut app = app();
            app.handle_drag(5.0, 5.0);
            app.last = None;
            app.handle_drag(5.0, 5.0);
            assert!(app.last.is_none());
        }
    }
}

#[cfg(not(all(feature = "demo_ui", not(feature = "cli_only"))))]
mod imp {
    use crate::config::DemoConfig;
    use crate::error::DemoError;

    pub fn run(_title: &str, _cfg: &DemoConfig) -> Result<(), DemoError> {
        Err(DemoError::Ui("built without the `demo_ui` feature".to_owned()))
    }
}

pub use imp::*;

/// Whether [`run`] can open a window in this build.
pub const AVAILABLE: bool = cfg!(all(feature = "demo_ui", not(feature = "cli_only")));
