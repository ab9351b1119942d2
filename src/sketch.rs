// Drag handling for the two-canvas transform demo.
//
// Canvas A collects the raw pointer trail plus the pipeline A image of each
// point. Canvas B collects only the pipeline B image.

use crate::canvas::{Canvas, paint};
use crate::config::DemoConfig;
use crate::error::TransformError;
use crate::mat3::{Mat3, Vec3, apply, compose, make_vector};
use crate::params::TransformParams;
use serde::Serialize;

/// Which composition order to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pipeline {
    /// `(translation * rotation) * scale`
    A,
    /// `(scale * translation) * rotation`
    B,
}

impl Pipeline {
    pub fn matrix(self, p: &TransformParams) -> Result<Mat3, TransformError> {
        let t = Mat3::translation(p.translate_x, p.translate_y);
        let r = Mat3::rotation(p.rotation_deg);
        let s = Mat3::scale(p.scale_x, p.scale_y);
        match self {
            Pipeline::A => compose(&compose(&t, &r)?, &s),
            Pipeline::B => compose(&compose(&s, &t)?, &r),
        }
    }
}

/// Values produced by one drag event, for previews and logging.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DragReport {
    pub input: Vec3,
    pub vector_a: Vec3,
    pub vector_b: Vec3,
    pub matrix_a: Mat3,
    pub matrix_b: Mat3,
}

pub struct Sketch {
    a: Canvas,
    b: Canvas,
}

impl Sketch {
    pub fn new(cfg: &DemoConfig) -> Self {
        Self {
            a: Canvas::new(cfg.width, cfg.height, cfg.background_a),
            b: Canvas::new(cfg.width, cfg.height, cfg.background_b),
        }
    }

    pub fn canvas_a(&self) -> &Canvas {
        &self.a
    }

    pub fn canvas_b(&self) -> &Canvas {
        &self.b
    }

    pub fn on_drag(&mut self, x: f64, y: f64, params: &TransformParams) -> Result<DragReport, TransformError> {
        let input = make_vector(x, y);
        paint(&mut self.a, input);

        let matrix_a = Pipeline::A.matrix(params)?;
        let vector_a = apply(&matrix_a, input);
        paint(&mut self.a, vector_a);

        let matrix_b = Pipeline::B.matrix(params)?;
        let vector_b = apply(&matrix_b, input);
        paint(&mut self.b, vector_b);

        log::debug!(
            "drag ({x}, {y}) -> A ({:.3}, {:.3}) B ({:.3}, {:.3})",
            vector_a.x,
            vector_a.y,
            vector_b.x,
            vector_b.y
        );

        Ok(DragReport {
            input,
            vector_a,
            vector_b,
            matrix_a,
            matrix_b,
        })
    }

    /// The canvas to display and its caption. Space held shows B.
    pub fn view(&self, space_down: bool) -> (&Canvas, &'static str) {
        if space_down {
            (&self.b, "Image B")
        } else {
            (&self.a, "Image A")
        }
    }

    pub fn view_mut(&mut self, space_down: bool) -> &mut Canvas {
        if space_down { &mut self.b } else { &mut self.a }
    }

    pub fn clear(&mut self) {
        self.a.clear();
        self.b.clear();
    }

    /// Feeds every point of `stroke` through [`Sketch::on_drag`] in order.
    pub fn replay(&mut self, stroke: &[[f64; 2]], params: &TransformParams) -> Result<Vec<DragReport>, TransformError> {
        stroke
            .iter()
            .map(|&[x, y]| self.on_drag(x, y, params))
            .collect()
    }
}

/// The fixed sample constructions logged at startup.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerificationDump {
    pub make_vector: Vec3,
    pub identity: Mat3,
    pub translation: Mat3,
    pub scale: Mat3,
    pub rotation: Mat3,
    pub shear: Mat3,
}

pub fn verification_dump(params: &TransformParams) -> VerificationDump {
    VerificationDump {
        make_vector: make_vector(21.0, 37.0),
        identity: Mat3::identity(),
        translation: Mat3::translation(73.0, 21.0),
        scale: Mat3::scale(3.0, 5.0),
        rotation: Mat3::rotation(params.rotation_deg),
        shear: Mat3::shear(1.0, 0.0),
    }
}
