/// One linear piece of a calibration curve, active from `start` up to the
/// next segment's start.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    pub start: f64,
    pub base: f64,
    pub slope: f64,
}

/// Piecewise-linear map from a raw ratio in [0, 1] to a calibrated score.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoreCurve {
    pub segments: &'static [Segment],
    pub floor: i32,
    pub ceiling: i32,
}

impl ScoreCurve {
    pub(crate) fn raw(&self, ratio: f64) -> f64 {
        let segment = self
            .segments
            .iter()
            .rev()
            .find(|segment| ratio >= segment.start)
            .or_else(|| self.segments.first());

        match segment {
            Some(segment) => segment.base + (ratio - segment.start) * segment.slope,
            None => self.floor as f64,
        }
    }

    pub(crate) fn score(&self, ratio: f64) -> i32 {
        let rounded = self.raw(ratio).round() as i32;
        rounded.clamp(self.floor, self.ceiling)
    }
}

/// Score band: everything at or above `min_score` down to the next band.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Band {
    pub min_score: i32,
    pub percentile: u8,
    pub description: &'static str,
    pub interpretation: &'static str,
}

/// Ranked bands ordered by descending `min_score`, plus the band every
/// lower score falls into. The floor's `min_score` is never consulted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BandTable {
    pub ranked: &'static [Band],
    pub floor: Band,
}

impl BandTable {
    pub(crate) fn band_for(&'static self, score: i32) -> &'static Band {
        self.ranked
            .iter()
            .find(|band| score >= band.min_score)
            .unwrap_or(&self.floor)
    }
}

#[rustfmt::skip]
pub(crate) const IQ_CURVE: ScoreCurve = ScoreCurve {
    segments: &[
        Segment { start: 0.0, base: 70.0, slope: 75.0 },
        Segment { start: 0.2, base: 85.0, slope: 75.0 },
        Segment { start: 0.4, base: 100.0, slope: 100.0 },
        Segment { start: 0.6, base: 120.0, slope: 100.0 },
        Segment { start: 0.8, base: 140.0, slope: 100.0 },
        Segment { start: 0.9, base: 150.0, slope: 100.0 },
    ],
    floor: 70,
    ceiling: 160,
};

#[rustfmt::skip]
pub(crate) const EQ_CURVE: ScoreCurve = ScoreCurve {
    segments: &[
        Segment { start: 0.0, base: 15.0, slope: 75.0 },
        Segment { start: 0.2, base: 30.0, slope: 75.0 },
        Segment { start: 0.4, base: 45.0, slope: 75.0 },
        Segment { start: 0.6, base: 60.0, slope: 75.0 },
        Segment { start: 0.8, base: 75.0, slope: 100.0 },
        Segment { start: 0.9, base: 85.0, slope: 150.0 },
    ],
    floor: 15,
    ceiling: 100,
};

pub(crate) static IQ_BANDS: BandTable = BandTable {
    ranked: &[
        Band {
            min_score: 145,
            percentile: 99,
            description: "Exceptionally gifted",
            interpretation: "Your IQ score indicates exceptional cognitive abilities. You excel at complex problem-solving and abstract reasoning.",
        },
        Band {
            min_score: 130,
            percentile: 95,
            description: "Highly gifted",
            interpretation: "Your IQ score shows highly gifted intellectual abilities. You have strong analytical and reasoning skills.",
        },
        Band {
            min_score: 115,
            percentile: 84,
            description: "Above average",
            interpretation: "Your IQ score is above average, indicating good problem-solving and analytical abilities.",
        },
        Band {
            min_score: 100,
            percentile: 50,
            description: "Average",
            interpretation: "Your IQ score is in the average range, showing solid cognitive abilities.",
        },
        Band {
            min_score: 85,
            percentile: 16,
            description: "Below average",
            interpretation: "Your IQ score is below average. Consider focusing on developing analytical and reasoning skills.",
        },
    ],
    floor: Band {
        min_score: i32::MIN,
        percentile: 5,
        description: "Significantly below average",
        interpretation: "Your IQ score suggests you may benefit from additional cognitive training and practice.",
    },
};

pub(crate) static EQ_BANDS: BandTable = BandTable {
    ranked: &[
        Band {
            min_score: 90,
            percentile: 95,
            description: "Exceptionally high emotional intelligence",
            interpretation: "Your EQ score indicates exceptional emotional intelligence. You excel at understanding and managing emotions.",
        },
        Band {
            min_score: 80,
            percentile: 84,
            description: "High emotional intelligence",
            interpretation: "Your EQ score shows high emotional intelligence. You're skilled at reading emotions and social situations.",
        },
        Band {
            min_score: 70,
            percentile: 68,
            description: "Above average emotional intelligence",
            interpretation: "Your EQ score is above average, indicating good emotional awareness and social skills.",
        },
        Band {
            min_score: 60,
            percentile: 50,
            description: "Average emotional intelligence",
            interpretation: "Your EQ score is in the average range, showing solid emotional understanding.",
        },
        Band {
            min_score: 50,
            percentile: 32,
            description: "Below average emotional intelligence",
            interpretation: "Your EQ score is below average. Consider working on emotional awareness and empathy.",
        },
        Band {
            min_score: 40,
            percentile: 16,
            description: "Low emotional intelligence",
            interpretation: "Your EQ score suggests room for improvement in emotional intelligence and social skills.",
        },
    ],
    floor: Band {
        min_score: i32::MIN,
        percentile: 5,
        description: "Very low emotional intelligence",
        interpretation: "Your EQ score indicates significant opportunity to develop emotional intelligence and interpersonal skills.",
    },
};
