// crates/touch_file/tests/integration_restore.rs

use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use touch_file::{touch_file, ThreadSleep};

mod integration_restore {
    use super::*;

    /// Content must come back byte-for-byte, whatever it holds.
    #[test]
    fn test_restore_is_byte_identical() {
        let dir = tempdir().unwrap();
        let cases: Vec<(&str, Vec<u8>)> = vec![
            ("empty.ts", Vec::new()),
            ("no_newline.js", b"console.log('hi')".to_vec()),
            ("crlf.html", b"<p>\r\n</p>\r\n".to_vec()),
            ("utf8.tsx", "const s = \"h\u{e9}llo \u{1f600}\";\n".as_bytes().to_vec()),
            ("latin1.css", vec![b'/', b'*', 0xE9, 0xFF, 0xFE, b'*', b'/', b'\n']),
        ];

        for (name, bytes) in cases {
            let path = dir.path().join(name);
            fs::write(&path, &bytes).unwrap();

            touch_file(&path, "# activity marker 4321", Duration::from_millis(5), &ThreadSleep)
                .unwrap();

            assert_eq!(fs::read(&path).unwrap(), bytes, "{} was altered", name);
        }
    }

    /// The marker goes on its own line even when the file lacks a trailing newline.
    #[test]
    fn test_marker_is_newline_delimited() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "export {}").unwrap();

        let pause = |_: Duration| {
            let during = fs::read_to_string(&path).unwrap();
            assert_eq!(during, "export {}\n# activity marker 1000\n");
        };
        touch_file(&path, "# activity marker 1000", Duration::ZERO, &pause).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {}");
    }

    #[test]
    fn test_directory_path_fails_without_panic() {
        let dir = tempdir().unwrap();
        let result = touch_file(dir.path(), "marker", Duration::ZERO, &ThreadSleep);
        assert!(result.is_err());
    }
}
