/// Frozen validation gate for motion model 1. Not a tunable.
pub const MODEL1_MAX_DIST: f64 = 5.9;
/// Frozen validation gate for motion model 3. Not a tunable.
pub const MODEL3_MAX_DIST: f64 = 12.9;

/// Tuning parameters handed to the MHT tracker through its parameter file.
#[derive(Debug, Clone, PartialEq)]
pub struct MhtParameters {
    pub pos_var_x: f64,
    pub pos_var_y: f64,
    pub grad_var: f64,
    pub int_var: f64,
    pub proc_var: f64,
    /// Probability of detection.
    pub pod: f64,
    pub lambda_x: f64,
    pub new_tracks_per_scan: f64,
    pub mean_false_alarms_per_scan: f64,
    pub max_glob_hypo_per_grp: i64,
    /// Maximum depth of track trees.
    pub max_depth: i64,
    /// Minimum likelihood ratio between worst and best global hypotheses.
    pub min_ratio: f64,
    pub int_thresh: f64,
    /// Mahalanobis gate for model 2 (constant velocity).
    pub max_dist: f64,
    /// Initial state variance, velocity component.
    pub init_var_vel: f64,
    /// Number of scans to make.
    pub frame_cnt: i64,
    pub diag_a: i64,
    pub diag_b: i64,
    pub diag_c: i64,
}

impl Default for MhtParameters {
    fn default() -> Self {
        Self {
            pos_var_x: 1.0,
            pos_var_y: 1.0,
            grad_var: 0.01,
            int_var: 100.0,
            proc_var: 0.5,
            pod: 0.9999,
            lambda_x: 20.0,
            new_tracks_per_scan: 0.004,
            mean_false_alarms_per_scan: 0.0002,
            max_glob_hypo_per_grp: 300,
            max_depth: 3,
            min_ratio: 0.001,
            int_thresh: 0.90,
            max_dist: 5.9,
            init_var_vel: 200.0,
            frame_cnt: 999999,
            diag_a: 999999,
            diag_b: 999999,
            diag_c: 999999,
        }
    }
}

/// A single positional value as it appears in the parameter file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Float(f64),
    Int(i64),
}

impl MhtParameters {
    /// Tunable fields in file order, paired with their names.
    ///
    /// The frozen model 1/3 gates are not listed; see [`MODEL1_MAX_DIST`]
    /// and [`MODEL3_MAX_DIST`].
    pub fn fields(&self) -> [(&'static str, Value); 19] {
        use Value::{Float, Int};
        [
            ("posVarX", Float(self.pos_var_x)),
            ("posVarY", Float(self.pos_var_y)),
            ("gradVar", Float(self.grad_var)),
            ("intVar", Float(self.int_var)),
            ("procVar", Float(self.proc_var)),
            ("pod", Float(self.pod)),
            ("lambda_x", Float(self.lambda_x)),
            ("newTracksPerScan", Float(self.new_tracks_per_scan)),
            ("meanFAlarmsPerScan", Float(self.mean_false_alarms_per_scan)),
            ("maxGlobHypoPerGrp", Int(self.max_glob_hypo_per_grp)),
            ("maxDepth", Int(self.max_depth)),
            ("minRatio", Float(self.min_ratio)),
            ("intThresh", Float(self.int_thresh)),
            ("maxDist", Float(self.max_dist)),
            ("initVarVel", Float(self.init_var_vel)),
            ("frameCnt", Int(self.frame_cnt)),
            ("diagA", Int(self.diag_a)),
            ("diagB", Int(self.diag_b)),
            ("diagC", Int(self.diag_c)),
        ]
    }

    /// Mutable counterpart of [`fields`](Self::fields), same order.
    pub fn fields_mut(&mut self) -> [(&'static str, Slot<'_>); 19] {
        use Slot::{Float, Int};
        [
            ("posVarX", Float(&mut self.pos_var_x)),
            ("posVarY", Float(&mut self.pos_var_y)),
            ("gradVar", Float(&mut self.grad_var)),
            ("intVar", Float(&mut self.int_var)),
            ("procVar", Float(&mut self.proc_var)),
            ("pod", Float(&mut self.pod)),
            ("lambda_x", Float(&mut self.lambda_x)),
            ("newTracksPerScan", Float(&mut self.new_tracks_per_scan)),
            ("meanFAlarmsPerScan", Float(&mut self.mean_false_alarms_per_scan)),
            ("maxGlobHypoPerGrp", Int(&mut self.max_glob_hypo_per_grp)),
            ("maxDepth", Int(&mut self.max_depth)),
            ("minRatio", Float(&mut self.min_ratio)),
            ("intThresh", Float(&mut self.int_thresh)),
            ("maxDist", Float(&mut self.max_dist)),
            ("initVarVel", Float(&mut self.init_var_vel)),
            ("frameCnt", Int(&mut self.frame_cnt)),
            ("diagA", Int(&mut self.diag_a)),
            ("diagB", Int(&mut self.diag_b)),
            ("diagC", Int(&mut self.diag_c)),
        ]
    }
}

/// Borrowed, typed handle to one field.
#[derive(Debug)]
pub enum Slot<'a> {
    Float(&'a mut f64),
    Int(&'a mut i64),
}
