use crate::inspector::Report;
use colored::Colorize;
use std::path::Path;

const RULE_WIDTH: usize = 60;

#[must_use]
pub fn render_report(report: &Report) -> String {
    let entry = &report.entry;
    let perms = &report.permissions;
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();

    // Header
    out.push('\n');
    out.push_str(&format!("{heavy}\n"));
    out.push_str(&format!("📁 File: {}\n", entry.path.display()));
    out.push_str(&format!("{heavy}\n"));

    // Basic info
    out.push_str(&format!("\n📋 Type: {}\n", entry.kind.label()));
    out.push_str(&format!(
        "💾 Size: {} bytes ({})\n",
        entry.size_bytes,
        human_bytes::human_bytes(entry.size_bytes as f64)
    ));

    // Ownership
    out.push_str(&format!("\n👤 Owner ID: {}\n", entry.owner_id));
    out.push_str(&format!("👥 Group ID: {}\n", entry.group_id));
    if let Some(owner) = &entry.owner_name {
        out.push_str(&format!("   Owner: {owner}\n"));
    }
    if let Some(group) = &entry.group_name {
        out.push_str(&format!("   Group: {group}\n"));
    }

    // Permissions
    out.push_str(&format!(
        "\n🔐 Permissions: {} ({})\n",
        perms.symbolic().cyan(),
        perms.octal()
    ));
    out.push_str(&format!("{light}\n"));
    out.push_str(&format!("Owner:   {}\n", perms.owner.symbolic()));
    out.push_str(&format!("Group:   {}\n", perms.group.symbolic()));
    out.push_str(&format!("Others:  {}\n", perms.other.symbolic()));

    if perms.has_special() {
        out.push_str("\n⭐ Special:\n");
        if perms.setuid {
            out.push_str("   • Setuid (runs as owner)\n");
        }
        if perms.setgid {
            out.push_str("   • Setgid (runs as group)\n");
        }
        if perms.sticky {
            out.push_str("   • Sticky bit (protected delete)\n");
        }
    }

    out.push_str("\n🛡️  Security Check:\n");
    if report.warnings.is_empty() {
        out.push_str(&format!("   {}\n", "✅ No issues found".green()));
    } else {
        for w in &report.warnings {
            out.push_str(&format!("   {}\n", format!("⚠️  {}", w.message()).yellow()));
        }
    }

    out.push_str(&format!(
        "\n📅 Last modified: {}\n",
        entry.modified_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("{heavy}\n"));

    out
}

#[must_use]
pub fn render_not_found(path: &Path) -> String {
    format!("\n{} {}", "❌ File not found:".red(), path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::evaluate;
    use crate::types::{Entry, EntryKind};
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn entry(kind: EntryKind, mode_bits: u32) -> Entry {
        Entry {
            path: PathBuf::from("/srv/shared"),
            kind,
            size_bytes: 4096,
            owner_id: 1000,
            group_id: 100,
            owner_name: Some("alice".to_string()),
            group_name: None,
            mode_bits,
            modified_at: Local.with_ymd_and_hms(2024, 7, 29, 13, 5, 9).unwrap(),
        }
    }

    fn render(kind: EntryKind, mode_bits: u32) -> String {
        colored::control::set_override(false);
        render_report(&evaluate(entry(kind, mode_bits)))
    }

    fn section(out: &str, label: &str) -> Vec<String> {
        out.lines()
            .skip_while(|l| !l.contains(label))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_header_and_rules() {
        let out = render(EntryKind::File, 0o100_644);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(lines[2], "📁 File: /srv/shared");
        assert_eq!(lines[3], "=".repeat(60));
        assert_eq!(lines.last().copied(), Some("=".repeat(60).as_str()));
    }

    #[test]
    fn test_permission_lines_644() {
        let out = render(EntryKind::File, 0o100_644);
        assert!(out.contains("🔐 Permissions: -rw-r--r-- (0o644)\n"));
        assert!(out.contains(&format!("{}\n", "-".repeat(60))));
        assert!(out.contains("Owner:   rw-\n"));
        assert!(out.contains("Group:   r--\n"));
        assert!(out.contains("Others:  r--\n"));
        assert!(!out.contains("Special"));
    }

    #[test]
    fn test_identity_lines() {
        let out = render(EntryKind::File, 0o100_644);
        assert!(out.contains("👤 Owner ID: 1000\n"));
        assert!(out.contains("👥 Group ID: 100\n"));
        assert!(out.contains("   Owner: alice\n"));
        assert!(!out.contains("   Group: "));
    }

    #[test]
    fn test_sticky_directory_sections() {
        let out = render(EntryKind::Directory, 0o041_777);
        assert!(out.contains("📋 Type: Directory\n"));
        assert_eq!(
            section(&out, "⭐ Special:"),
            vec!["   • Sticky bit (protected delete)"]
        );
        assert_eq!(
            section(&out, "Security Check:"),
            vec!["   ⚠️  Anyone can modify this!"]
        );
    }

    #[test]
    fn test_unsafe_directory_warning_order() {
        let out = render(EntryKind::Directory, 0o040_777);
        assert_eq!(
            section(&out, "Security Check:"),
            vec![
                "   ⚠️  Anyone can modify this!",
                "   ⚠️  Unsafe directory permissions!"
            ]
        );
    }

    #[test]
    fn test_setuid_listed_and_warned() {
        let out = render(EntryKind::File, 0o104_755);
        assert_eq!(section(&out, "⭐ Special:"), vec!["   • Setuid (runs as owner)"]);
        assert_eq!(
            section(&out, "Security Check:"),
            vec!["   ⚠️  Runs with special privileges"]
        );
    }

    #[test]
    fn test_clean_file_has_single_ok_line() {
        let out = render(EntryKind::File, 0o100_640);
        assert_eq!(section(&out, "Security Check:"), vec!["   ✅ No issues found"]);
    }

    #[test]
    fn test_size_and_timestamp() {
        let out = render(EntryKind::File, 0o100_644);
        assert!(out.contains("💾 Size: 4096 bytes ("));
        assert!(out.contains("📅 Last modified: 2024-07-29 13:05:09\n"));
    }

    #[test]
    fn test_not_found_message() {
        colored::control::set_override(false);
        assert_eq!(
            render_not_found(Path::new("missing.txt")),
            "\n❌ File not found: missing.txt"
        );
    }
}
