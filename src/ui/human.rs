//! Human-readable progress output for deployment runs.

use stevedore::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::glyphs::Glyph;

/// Prints one status line per event to stdout.
pub struct HumanEventSink {
    unicode: bool,
    plan_len: std::sync::atomic::AtomicUsize,
}

impl HumanEventSink {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            plan_len: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    fn glyph(&self, glyph: Glyph) -> &'static str {
        glyph.render(self.unicode)
    }

    fn step(&self, index: usize) -> String {
        let total = self.plan_len.load(std::sync::atomic::Ordering::Relaxed);
        format!("[{}/{}]", index + 1, total)
    }
}

impl DeployEventSink for HumanEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                network,
                network_name,
                plan_len,
            } => {
                self.plan_len
                    .store(plan_len, std::sync::atomic::Ordering::Relaxed);
                println!("Deploying {plan_len} contracts to {network_name} (network {network})");
            }
            DeployEvent::ContractSkipped {
                index,
                name,
                address,
            } => {
                println!(
                    "{} {} {name} already deployed at {address:#x}",
                    self.step(index),
                    self.glyph(Glyph::Skip)
                );
            }
            DeployEvent::ContractLinked {
                index,
                name,
                libraries,
            } => {
                if libraries > 0 {
                    println!(
                        "{} {} {name} linked against {libraries} librar{}",
                        self.step(index),
                        self.glyph(Glyph::Link),
                        if libraries == 1 { "y" } else { "ies" }
                    );
                }
            }
            DeployEvent::ContractSubmitted {
                index,
                name,
                tx_hash,
            } => {
                println!(
                    "{} {} {name} submitted ({tx_hash:#x})",
                    self.step(index),
                    self.glyph(Glyph::Submit)
                );
            }
            DeployEvent::ContractDeployed {
                index,
                name,
                address,
            } => {
                println!(
                    "{} {} {name} deployed at {address:#x}",
                    self.step(index),
                    self.glyph(Glyph::Success)
                );
            }
            DeployEvent::ContractFailed { index, name, error } => {
                eprintln!(
                    "{} {} {name} failed: {error}",
                    self.step(index),
                    self.glyph(Glyph::Error)
                );
            }
            DeployEvent::Completed {
                deployed_count,
                skipped_count,
                failed,
            } => {
                if failed {
                    eprintln!(
                        "Aborted: {deployed_count} deployed, {skipped_count} skipped; rerun to resume"
                    );
                } else {
                    println!("Done: {deployed_count} deployed, {skipped_count} skipped");
                }
            }
        }
    }
}
