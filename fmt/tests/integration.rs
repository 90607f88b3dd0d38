use zuulfmt::rules::Rules;
use zuulfmt::{Formatter, reorder, split};

fn fmt(source: &str) -> String {
    zuulfmt::fmt(source).expect("format failed")
}

const ANSIBLE_TASKS: &str = "
- copy:
    src: file
    dst: new-file
  name: copy a file
  when: true
- command: test
  name: run a command
";

const ANSIBLE_TASKS_FORMATTED: &str = "
- name: copy a file
  when: true
  copy:
    src: file
    dst: new-file

- name: run a command
  command: test
";

const ZUUL_JOBS: &str = "
- job:
    branches:
      - master
      - f33
      - f32
      - epel8
    description: Check the project has a tests/tests.yml
    name: check-for-tests
    nodeset:
      nodes: []
    run: playbooks/rpm/check-for-tests.yaml
- job:
    abstract: true
    description: Base job for RPM build on Fedora Koji
    name: common-koji-rpm-build
    nodeset: fedora-33-container
    protected: true
    provides:
      - repo
    roles:
      - zuul: zuul-distro-jobs
    run: playbooks/koji/build-ng.yaml
    secrets:
      - name: krb_keytab
        secret: krb_keytab
    timeout: 21600
";

const ZUUL_JOBS_FORMATTED: &str = "
- job:
    name: check-for-tests
    description: Check the project has a tests/tests.yml
    run: playbooks/rpm/check-for-tests.yaml
    branches:
      - master
      - f33
      - f32
      - epel8
    nodeset:
      nodes: []

- job:
    name: common-koji-rpm-build
    description: Base job for RPM build on Fedora Koji
    run: playbooks/koji/build-ng.yaml
    abstract: true
    nodeset: fedora-33-container
    protected: true
    provides:
      - repo
    roles:
      - zuul: zuul-distro-jobs
    secrets:
      - name: krb_keytab
        secret: krb_keytab
    timeout: 21600
";

#[test]
fn ansible_task_sample() {
    assert_eq!(fmt(ANSIBLE_TASKS), ANSIBLE_TASKS_FORMATTED);
}

#[test]
fn zuul_job_sample() {
    assert_eq!(fmt(ZUUL_JOBS), ZUUL_JOBS_FORMATTED);
}

#[test]
fn formatting_is_idempotent() {
    let once = fmt(ANSIBLE_TASKS);
    assert_eq!(fmt(&once), once);

    let once = fmt(ZUUL_JOBS);
    assert_eq!(fmt(&once), once);
}

#[test]
fn literal_block_scalar_stays_attached() {
    let input = "
- script: |
    #!/bin/sh
    echo hello
  name: write a script
";
    let expected = "
- name: write a script
  script: |
    #!/bin/sh
    echo hello
";
    assert_eq!(fmt(input), expected);
}

#[test]
fn folded_block_scalar_stays_attached() {
    let input = "
- description: >
    a long description
    folded over lines
  name: folded
";
    let expected = "
- name: folded
  description: >
    a long description
    folded over lines
";
    assert_eq!(fmt(input), expected);
}

#[test]
fn priority_keys_lead_in_list_order() {
    let input = "
- register: out
  when: true
  become: true
  name: ordered
";
    let expected = "
- name: ordered
  when: true
  become: true
  register: out
";
    assert_eq!(fmt(input), expected);
}

#[test]
fn unknown_keys_keep_original_relative_order() {
    let input = "
- zebra: 1
  apple: 2
  name: rest is stable
  mango: 3
";
    let expected = "
- name: rest is stable
  zebra: 1
  apple: 2
  mango: 3
";
    assert_eq!(fmt(input), expected);
}

#[test]
fn wrapper_header_line_is_unchanged() {
    let input = "
- nodeset:
    nodes:
      - name: runner
        label: pod-fedora
    name: container
";
    let expected = "
- nodeset:
    name: container
    nodes:
      - name: runner
        label: pod-fedora
";
    assert_eq!(fmt(input), expected);
}

#[test]
fn blank_lines_are_normalized() {
    let input = "
- beta: 1
  name: first


- gamma: 2

  name: second
";
    let expected = "
- name: first
  beta: 1

- name: second
  gamma: 2
";
    assert_eq!(fmt(input), expected);
}

#[test]
fn document_header_is_preserved() {
    let input = "---
- beta: 1
  name: with header
";
    let expected = "---
- name: with header
  beta: 1
";
    assert_eq!(fmt(input), expected);
}

#[test]
fn marker_on_first_byte_is_accepted() {
    let input = "- beta: 1\n  name: no leading newline\n";
    let expected = "\n- name: no leading newline\n  beta: 1\n";
    let once = fmt(input);
    assert_eq!(once, expected);
    assert_eq!(fmt(&once), once);
}

#[test]
fn document_without_sequence_is_rejected() {
    let err = zuulfmt::fmt("key: value\n").expect_err("expected a malformed-document error");
    assert!(
        err.message.contains("no top-level sequence"),
        "unexpected message: {}",
        err.message
    );
    assert_eq!(err.span, 0..11);
}

#[test]
fn reordering_conserves_items() {
    let rules = Rules::default();
    let (_, blocks) = split::split_blocks(ZUUL_JOBS, 0).expect("split failed");
    for raw in &blocks {
        let block = split::split_block(&rules, raw);
        let reordered = reorder::reorder_items(&rules, block.prefix, block.items.clone());

        let mut before = block.items.clone();
        let mut after = reordered;
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
}

#[test]
fn duplicate_keys_group_at_priority_slot() {
    let input = "
- name: first
  other: x
  name: second
";
    let expected = "
- name: first
  name: second
  other: x
";
    assert_eq!(fmt(input), expected);
}

#[test]
fn custom_rules_override_key_order() {
    let rules = Rules {
        key_order: vec!["command".to_string(), "name".to_string()],
        ..Rules::default()
    };
    let input = "
- name: custom
  command: test
";
    let expected = "
- command: test
  name: custom
";
    let formatter = Formatter::new(rules);
    assert_eq!(formatter.format(input, 0).expect("format failed"), expected);
}

#[test]
fn empty_wrapper_name_set_disables_wrapping() {
    let rules = Rules {
        wrapper_names: Vec::new(),
        ..Rules::default()
    };
    let input = "
- job:
    run: playbooks/test.yaml
    name: plain
";
    // Without the wrapper convention the whole `job:` mapping is a single
    // item at 2-space depth, so nothing moves.
    let expected = "
- job:
    run: playbooks/test.yaml
    name: plain
";
    let formatter = Formatter::new(rules);
    assert_eq!(formatter.format(input, 0).expect("format failed"), expected);
}
