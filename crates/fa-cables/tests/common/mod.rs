//! Shared test fixtures: designs and a recording line model.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use fa_cables::{DesignSpec, reference_cable_type};
use fa_core::Vec3;
use fa_lines::{
    Line, LineError, LineModel, LineResult, LineTypeTable, Point, SubsystemParams, SuspensionCase,
    build_elements,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut b) = self.0.lock() {
            b.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a WARN-level subscriber writing into a fresh capture.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture.contents())
}

pub fn design(lengths: &[f64]) -> DesignSpec {
    DesignSpec::uniform(reference_cable_type(), lengths, -100.0, 442.0)
}

/// One call received by a [`Recording`] model.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    BuildGeneric {
        lengths: Vec<f64>,
        type_names: Vec<String>,
        case: SuspensionCase,
    },
    SetEnd { r: Vec3, end_b: bool, sink: bool },
    Solve,
}

/// Line model that records its calls; fails every solve when `FAIL` is set.
#[derive(Debug)]
pub struct Recording<const FAIL: bool> {
    pub params: SubsystemParams,
    pub line_types: LineTypeTable,
    pub lines: Vec<Line>,
    pub points: Vec<Point>,
    pub calls: Vec<Call>,
}

pub type RecordingModel = Recording<false>;
pub type FailingModel = Recording<true>;

impl<const FAIL: bool> Recording<FAIL> {
    pub fn solve_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Solve).count()
    }

    pub fn end_calls(&self) -> Vec<(Vec3, bool, bool)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::SetEnd { r, end_b, sink } => Some((*r, *end_b, *sink)),
                _ => None,
            })
            .collect()
    }
}

impl<const FAIL: bool> LineModel for Recording<FAIL> {
    fn new(params: SubsystemParams) -> Self {
        Self {
            params,
            line_types: LineTypeTable::new(),
            lines: Vec::new(),
            points: Vec::new(),
            calls: Vec::new(),
        }
    }

    fn line_types_mut(&mut self) -> &mut LineTypeTable {
        &mut self.line_types
    }

    fn build_generic(
        &mut self,
        lengths: &[f64],
        type_names: &[String],
        case: SuspensionCase,
    ) -> LineResult<()> {
        self.calls.push(Call::BuildGeneric {
            lengths: lengths.to_vec(),
            type_names: type_names.to_vec(),
            case,
        });
        let (lines, points) = build_elements(
            &self.line_types,
            lengths,
            type_names,
            Vec3::zeros(),
            self.params.r_b_fair,
        )?;
        self.lines = lines;
        self.points = points;
        Ok(())
    }

    fn set_end_position(&mut self, r: Vec3, end_b: bool, sink: bool) {
        self.calls.push(Call::SetEnd { r, end_b, sink });
    }

    fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    fn static_solve(&mut self) -> LineResult<()> {
        self.calls.push(Call::Solve);
        if FAIL {
            return Err(LineError::ConvergenceFailed {
                what: "maximum iterations 100 reached".to_string(),
            });
        }
        Ok(())
    }
}
