#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use trusttree::input::PathFilter;
use trusttree::tree::{ExtMode, PrunedTree, TrieBuilder};

/// Build and prune a tree from raw paths, accepting everything.
pub fn build(paths: &[&str], mode: ExtMode, min_count: usize) -> PrunedTree {
    let mut builder = TrieBuilder::new(mode);
    builder.extend(paths, &PathFilter::accept_all());
    builder.finish(min_count)
}

/// Format paths as trust-database dump records.
pub fn dump(paths: &[&str]) -> String {
    let mut out = String::from("# fapolicyd trust database\n");
    for (i, path) in paths.iter().enumerate() {
        out.push_str(&format!("rpmdb {path} {} sha256:{i:064x}\n", 100 + i));
    }
    out
}

/// Write a dump file holding the given paths.
pub fn dump_file(paths: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(dump(paths).as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A small but realistic system layout.
pub const SYSTEM_PATHS: &[&str] = &[
    "/usr/bin/ls",
    "/usr/bin/cp",
    "/usr/bin/python3.11",
    "/usr/lib64/libc.so.6",
    "/usr/lib64/libm.so.6",
    "/usr/lib64/libz.so",
    "/usr/lib/python3.11/os.py",
    "/usr/lib/python3.11/json/__init__.py",
    "/usr/share/doc/README",
    "/etc/ssh/sshd_config",
    "/etc/hosts",
    "/etc/fstab",
    "/boot/efi/EFI/fedora/shimx64.efi",
    "/boot/efi/EFI/fedora/grubx64.efi",
];
