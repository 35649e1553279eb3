use std::collections::HashSet;

use crate::Kompass;
use crate::router::util::join_with_deadline;
use kompass_core::{
    Capability, EsgLightConfig, EsgLightReport, EsgLightRow, GrowthRow, GrowthScanConfig,
    GrowthScanReport, Instrument, KompassError, SnapshotReport, score_esg_light, score_growth,
};

/// Builder to orchestrate batch scoring across multiple instruments.
pub struct ScreenBuilder<'a> {
    pub(crate) kompass: &'a Kompass,
    pub(crate) instruments: Vec<Instrument>,
}

impl std::fmt::Debug for ScreenBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenBuilder")
            .field("kompass", &self.kompass)
            .field("instruments", &self.instruments)
            .finish()
    }
}

impl<'a> ScreenBuilder<'a> {
    /// Create a new builder bound to a `Kompass` instance.
    ///
    /// Behavior: starts with an empty instrument list.
    #[must_use]
    pub const fn new(kompass: &'a Kompass) -> Self {
        Self {
            kompass,
            instruments: Vec::new(),
        }
    }

    /// Replace the instruments list.
    ///
    /// Trade-offs: replaces any previously added instruments; use
    /// [`add_instrument`](Self::add_instrument) if you need to append.
    ///
    /// # Errors
    /// Returns an error if duplicate symbols are detected in the provided instruments.
    pub fn instruments(mut self, insts: &[Instrument]) -> Result<Self, KompassError> {
        let mut seen = HashSet::new();
        for inst in insts {
            let symbol = inst.symbol().to_string();
            if !seen.insert(symbol.clone()) {
                return Err(KompassError::InvalidArg(format!(
                    "duplicate symbol '{symbol}' in instruments list"
                )));
            }
        }

        self.instruments = insts.to_vec();
        Ok(self)
    }

    /// Add a single instrument to the list.
    ///
    /// # Errors
    /// Returns an error if the instrument's symbol already exists in the list.
    pub fn add_instrument(mut self, inst: Instrument) -> Result<Self, KompassError> {
        if self
            .instruments
            .iter()
            .any(|existing| existing.symbol_str() == inst.symbol_str())
        {
            return Err(KompassError::InvalidArg(format!(
                "duplicate symbol '{}' already exists in instruments list",
                inst.symbol()
            )));
        }

        self.instruments.push(inst);
        Ok(self)
    }

    /// Fan out snapshot assembly across all instruments.
    ///
    /// Each instrument is fetched and scored independently; there is no
    /// ordering dependency between records, so the whole batch runs
    /// concurrently under the optional request deadline.
    async fn snapshots(self) -> Result<Vec<SnapshotReport>, KompassError> {
        if self.instruments.is_empty() {
            return Err(KompassError::InvalidArg(
                "no instruments specified for screen".into(),
            ));
        }

        // Defensive check for duplicates (should not happen if using the builder correctly)
        let mut seen = HashSet::new();
        for inst in &self.instruments {
            let symbol = inst.symbol().to_string();
            if !seen.insert(symbol.clone()) {
                return Err(KompassError::InvalidArg(format!(
                    "duplicate symbol '{symbol}' detected in instruments list"
                )));
            }
        }

        let kompass = self.kompass;
        let tasks = self.instruments.iter().map(|inst| {
            let inst = inst.clone();
            async move {
                kompass
                    .snapshot(&inst)
                    .await
                    .unwrap_or_else(|e| SnapshotReport {
                        instrument: inst,
                        record: None,
                        warnings: vec![e],
                    })
            }
        });

        join_with_deadline(tasks, kompass.cfg.request_timeout)
            .await
            .map_err(|_| KompassError::request_timeout(Capability::Screen.to_string()))
    }

    /// Execute an ESG-Light screen and aggregate scored rows.
    ///
    /// Behavior and trade-offs:
    /// - Partial failures populate `warnings` without aborting the batch;
    ///   a symbol with no resolvable data at all is reported as not found.
    /// - Rows are sorted by descending score; ties keep input order.
    /// # Errors
    /// Returns an error only if no instruments are specified or if the
    /// overall request deadline elapses.
    pub async fn esg_light(self, cfg: &EsgLightConfig) -> Result<EsgLightReport, KompassError> {
        let mut rows: Vec<EsgLightRow> = Vec::new();
        let mut warnings: Vec<KompassError> = Vec::new();

        for report in self.snapshots().await? {
            warnings.extend(report.warnings);
            match report.record {
                Some(record) => rows.push(EsgLightRow {
                    result: score_esg_light(&record, cfg),
                    record,
                    instrument: report.instrument,
                }),
                None => warnings.push(KompassError::not_found(format!(
                    "snapshot for {}",
                    report.instrument.symbol()
                ))),
            }
        }

        rows.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        Ok(EsgLightReport { rows, warnings })
    }

    /// Execute a growth scan and aggregate scored rows.
    ///
    /// Same batching semantics as [`esg_light`](Self::esg_light); rows are
    /// sorted by descending star count.
    /// # Errors
    /// Returns an error only if no instruments are specified or if the
    /// overall request deadline elapses.
    pub async fn growth_scan(self, cfg: &GrowthScanConfig) -> Result<GrowthScanReport, KompassError> {
        let mut rows: Vec<GrowthRow> = Vec::new();
        let mut warnings: Vec<KompassError> = Vec::new();

        for report in self.snapshots().await? {
            warnings.extend(report.warnings);
            match report.record {
                Some(record) => rows.push(GrowthRow {
                    signal: score_growth(&record, cfg),
                    record,
                    instrument: report.instrument,
                }),
                None => warnings.push(KompassError::not_found(format!(
                    "snapshot for {}",
                    report.instrument.symbol()
                ))),
            }
        }

        rows.sort_by(|a, b| b.signal.stars.cmp(&a.signal.stars));
        Ok(GrowthScanReport { rows, warnings })
    }
}

impl Kompass {
    /// Begin building a batch screen.
    ///
    /// Typical usage: chain `instruments` then call `esg_light` or
    /// `growth_scan` with the desired rule table.
    #[must_use]
    pub const fn screen(&'_ self) -> ScreenBuilder<'_> {
        ScreenBuilder::new(self)
    }
}
