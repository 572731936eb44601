//! Text rendering of the security report.

use super::{Assessment, WriteStatus};
use crate::checker::Findings;
use crate::probe::ProbeResult;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

const RECOMMENDATIONS: [&str; 4] = [
    "Review Firebase Security Rules",
    "Implement proper authentication",
    "Restrict database access to authenticated users only",
    "Monitor database access logs",
];

/// Writes the full report for `findings` to `out`.
pub fn render<W: Write>(
    out: &mut W,
    findings: &Findings,
    assessment: &Assessment,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "🔍 FIREBASE SECURITY ANALYSIS REPORT")?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "\n📍 Database URL: {}", findings.base_url)?;

    writeln!(out, "\n📖 READ ACCESS:")?;
    if assessment.public_readable {
        writeln!(out, "❌ PUBLICLY READABLE - No authentication required!")?;
        if assessment.data_exposed {
            writeln!(out, "⚠️  Database contains data that is publicly accessible")?;
        } else {
            writeln!(out, "ℹ️  Database is empty or contains null values")?;
        }
    } else {
        writeln!(out, "✅ Read access properly restricted")?;
    }

    writeln!(out, "\n✏️  WRITE ACCESS:")?;
    match &assessment.write {
        WriteStatus::Writable => {
            writeln!(out, "❌ PUBLICLY WRITABLE - Anyone can modify data!")?;
            writeln!(out, "🚨 CRITICAL SECURITY RISK!")?;
        }
        WriteStatus::Untested(e) => {
            writeln!(out, "⚠️  Could not test write access: {}", e)?;
        }
        WriteStatus::Skipped => writeln!(out, "⏭️  Write access test skipped")?,
        WriteStatus::Restricted => writeln!(out, "✅ Write access properly restricted")?,
    }

    writeln!(out, "\n🛡️  OVERALL SECURITY STATUS:")?;
    if assessment.is_insecure() {
        writeln!(out, "🚨 INSECURE - Immediate action required!")?;
        writeln!(out, "\n💡 RECOMMENDATIONS:")?;
        for (i, rec) in RECOMMENDATIONS.iter().enumerate() {
            writeln!(out, "   {}. {}", i + 1, rec)?;
        }
    } else {
        writeln!(out, "✅ Database appears to be properly secured")?;
    }

    writeln!(out, "\n📊 DETAILED RESULTS:")?;
    for r in &findings.reads {
        writeln!(out, "\n   Endpoint: {}", r.endpoint)?;
        match &r.result {
            ProbeResult::Error(e) => writeln!(out, "     Status: Error - {}", e)?,
            ProbeResult::Observed(o) => {
                writeln!(out, "     Status Code: {}", o.status_code)?;
                writeln!(out, "     Accessible: {}", o.accessible)?;
                match &o.data {
                    Some(d) => writeln!(out, "     Has Data: {} ({})", d.has_data, d.data_type)?,
                    None => writeln!(out, "     Has Data: N/A")?,
                }
            }
        }
    }

    Ok(())
}
