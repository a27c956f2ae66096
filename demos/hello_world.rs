use path_kit::{UniPath, fs};

fn main() {
    // A Windows-syntax path normalizes to universal form: one separator,
    // lowercase drive shorthand.
    let mut games = UniPath::from("C:\\Games\\Doom");
    println!("universal: {}", games.uni_str());
    println!("native:    {}", games);

    // `append` inserts exactly one separator...
    games.append("wads");
    assert_eq!(games.uni_str(), "/c/Games/Doom/wads");

    // ...unless the component is rooted, in which case it wins outright.
    games.append("/d/other");
    assert_eq!(games.uni_str(), "/d/other");

    // `join` is the non-mutating flavor; extension replacement is immutable.
    let backup = games.join("config.ini").replace_extension("bak");
    assert_eq!(backup.uni_str(), "/d/other/config.bak");

    // Ambiguous input (drive-relative, or rooted without a drive letter)
    // produces the empty path after a diagnostic on stderr.
    let bad = UniPath::from("c:not\\rooted");
    assert!(bad.is_empty());

    // Device paths always exist, no filesystem query involved.
    assert!(fs::exists(&UniPath::from("/dev/null")));

    // Real queries go through the native form.
    let tmp = UniPath::from(std::env::temp_dir().as_path()).join("path_kit_demo");
    assert!(fs::create_directory(&tmp));
    println!("created:   {}", tmp);
    assert!(fs::is_directory(&tmp));
    fs::remove(&tmp);
}
