use pretty_assertions::assert_eq;

use config_diff_core::{flatten, Config, ParseError};

const RUNNING: &str = "\
! device: sw1 (EOS-ish)
hostname sw1
ip routing
banner login
    unauthorized access is
  prohibited
EOF
vlan 10
   name users
interface Ethernet1
   description uplink
   mtu 9000
   no shutdown
router bgp 65000
   router-id 10.0.0.1
   address-family ipv4
      network 10.0.0.0/8
      network 192.168.0.0/16
end
";

const STARTUP: &str = "\
hostname sw1
ip routing
vlan 10
   name users
interface Ethernet1
   description uplink
   mtu 1500
   no shutdown
router bgp 65000
   router-id 10.0.0.1
   address-family ipv4
      network 10.0.0.0/8
end
";

#[test]
fn self_comparison_is_empty_in_both_directions() {
    let running = Config::parse(RUNNING).expect("parse running");
    let again = Config::parse(RUNNING).expect("parse running again");

    let (left, right) = running.compare(&again);
    assert_eq!(left.line, "");
    assert!(left.is_empty());
    assert!(right.is_empty());
}

#[test]
fn differences_surface_with_their_mode_entry_commands() {
    let running = Config::parse(RUNNING).expect("parse running");
    let startup = Config::parse(STARTUP).expect("parse startup");

    let (extra, missing) = running.compare(&startup);

    // The banner only exists in the running config.
    assert!(extra
        .commands
        .iter()
        .any(|c| c.starts_with("banner login") && c.ends_with("EOF")));

    // mtu differs inside a matched interface mode.
    assert!(extra.commands.iter().any(|c| c == "interface Ethernet1"));
    let iface = extra.get_child("interface Ethernet1").expect("iface");
    assert_eq!(iface.commands, vec!["mtu 9000"]);

    // The extra network nests two modes deep.
    let bgp = extra.get_child("router bgp 65000").expect("bgp");
    let afi = bgp.get_child("address-family ipv4").expect("afi");
    assert_eq!(afi.commands, vec!["network 192.168.0.0/16"]);

    // The startup side only lacks; it has nothing of its own except the
    // older mtu inside the same interface mode.
    assert!(missing.commands.iter().any(|c| c == "interface Ethernet1"));
    let old_iface = missing.get_child("interface Ethernet1").expect("iface");
    assert_eq!(old_iface.commands, vec!["mtu 1500"]);
    assert!(missing.get_child("router bgp 65000").is_none());
}

#[test]
fn comparison_is_antisymmetric() {
    let running = Config::parse(RUNNING).expect("parse running");
    let startup = Config::parse(STARTUP).expect("parse startup");

    let (d1, d2) = running.compare(&startup);
    let (r1, r2) = startup.compare(&running);

    assert_eq!(d1, r2);
    assert_eq!(d2, r1);
}

#[test]
fn identical_sections_never_reach_the_results() {
    let running = Config::parse(RUNNING).expect("parse running");
    let startup = Config::parse(STARTUP).expect("parse startup");

    let (extra, missing) = running.compare(&startup);

    // vlan 10 is identical on both sides.
    assert!(extra.get_child("vlan 10").is_none());
    assert!(!extra.commands.iter().any(|c| c == "vlan 10"));
    assert!(missing.get_child("vlan 10").is_none());
}

#[test]
fn diff_results_flatten_into_replayable_command_lists() {
    let running = Config::parse(RUNNING).expect("parse running");
    let startup = Config::parse(STARTUP).expect("parse startup");

    let (extra, _) = running.compare(&startup);
    let commands = flatten(&extra);

    let iface_entry = commands
        .iter()
        .position(|c| c == "interface Ethernet1")
        .expect("entry command");
    let mtu = commands.iter().position(|c| c == "mtu 9000").expect("mtu");
    assert!(iface_entry < mtu);
}

#[test]
fn comment_and_end_lines_never_become_commands() {
    let running = Config::parse(RUNNING).expect("parse running");

    let commands = flatten(running.root());
    assert!(!commands.iter().any(|c| c.starts_with('!')));
    assert!(!commands.iter().any(|c| c == "end"));
}

#[test]
fn off_unit_indentation_fails_the_build_with_line_detail() {
    let text = "interface Ethernet1\n  mtu 9000\n";
    let err = Config::parse(text).unwrap_err();

    match err {
        ParseError::Indentation { line, width, unit } => {
            assert_eq!(line, "  mtu 9000");
            assert_eq!(width, 2);
            assert_eq!(unit, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn banner_interior_is_exempt_from_indentation_rules() {
    let running = Config::parse(RUNNING).expect("parse running");

    let banner = running
        .root()
        .commands
        .iter()
        .find(|c| c.starts_with("banner login"))
        .expect("banner command");
    assert_eq!(
        *banner,
        "banner login\n    unauthorized access is\n  prohibited\nEOF"
    );
}
