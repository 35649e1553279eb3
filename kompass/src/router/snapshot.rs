use crate::Kompass;
use kompass_core::{KompassError, SnapshotReport, normalize};

fn append_actionable(errors: &mut Vec<KompassError>, err: KompassError) {
    match err {
        KompassError::AllProvidersFailed(list) => {
            for inner in list {
                append_actionable(errors, inner);
            }
        }
        KompassError::Unsupported { .. } | KompassError::NotFound { .. } => {}
        other => errors.push(other),
    }
}

impl Kompass {
    /// Assemble a normalized [`kompass_core::FundamentalsRecord`] by composing
    /// multiple data sources.
    ///
    /// Behavior and trade-offs:
    /// - Executes `fundamentals`, `profile`, `sustainability`, and
    ///   `performance` concurrently, then synthesizes a best-effort record.
    ///   Individual subcalls may fail without failing the overall result.
    /// - The record is present when at least one component resolved; missing
    ///   components simply leave their fields unset, which the (total)
    ///   scoring engine tolerates by design.
    /// - Benign failures (capability absent, not found) are swallowed;
    ///   actionable ones are surfaced in `warnings`.
    /// # Errors
    /// Never fails under normal operation; per-source errors are reported in
    /// the `warnings` field instead.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "kompass::router",
            skip(self),
            fields(symbol = %inst.symbol()),
        )
    )]
    pub async fn snapshot(
        &self,
        inst: &kompass_core::Instrument,
    ) -> Result<SnapshotReport, KompassError> {
        let (fundamentals_res, profile_res, esg_res, perf_res) = tokio::join!(
            self.fundamentals(inst),
            self.profile(inst),
            self.sustainability(inst),
            self.performance(inst)
        );

        // Collect errors with flattening of AllProvidersFailed for transparency
        let mut warnings: Vec<KompassError> = Vec::new();
        let mut push_err = |e: KompassError| append_actionable(&mut warnings, e);

        let fundamentals = match fundamentals_res {
            Ok(v) => Some(v),
            Err(e) => {
                push_err(e);
                None
            }
        };
        let profile = match profile_res {
            Ok(v) => Some(v),
            Err(e) => {
                push_err(e);
                None
            }
        };
        let esg = match esg_res {
            Ok(v) => Some(v),
            Err(e) => {
                push_err(e);
                None
            }
        };
        let performance = match perf_res {
            Ok(v) => Some(v),
            Err(e) => {
                push_err(e);
                None
            }
        };

        let record = if fundamentals.is_none()
            && profile.is_none()
            && esg.is_none()
            && performance.is_none()
        {
            None
        } else {
            Some(normalize::assemble(
                fundamentals.as_ref(),
                profile.as_ref(),
                esg.as_ref(),
                performance.as_ref(),
            ))
        };

        Ok(SnapshotReport {
            instrument: inst.clone(),
            record,
            warnings,
        })
    }
}
