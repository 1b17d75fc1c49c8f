//! Reusable fixture content for integration tests.

/// Descriptors `[a (no deps), b (depends on a), c (depends on a and b)]`
pub const PLAN_ABC: &str = r#"
[[component]]
name = "a"

[[component]]
name = "b"
depends_on = ["a"]
args = [{ ref = "a" }]

[[component]]
name = "c"
depends_on = ["a", "b"]
args = [{ ref = "a" }, { ref = "b" }]
"#;

/// A single standalone component
pub const PLAN_SINGLE: &str = r#"
[[component]]
name = "a"
"#;

/// Invalid: `a` depends on a component declared after it
pub const PLAN_FORWARD_DEP: &str = r#"
[[component]]
name = "a"
depends_on = ["b"]

[[component]]
name = "b"
"#;

/// Scripted fake environment client. Speaks the stagehand client protocol,
/// appends one line per call to `calls.log`, and keeps its registry as one
/// file per name next to itself. Deployment fails when a
/// `fail_deploy_<name>` marker exists or the gas ceiling is zero.
pub const FAKE_CLIENT_SH: &str = r#"#!/bin/sh
set -eu
here="$(cd "$(dirname "$0")" && pwd)"
log="$here/calls.log"
registry="$here/registry"

cmd="${1:-}"
[ $# -gt 0 ] && shift
if [ "$cmd" = "--version" ]; then
  echo "fake-env 1.0"
  exit 0
fi

name=""; gas=""; address=""; args=""
while [ $# -gt 0 ]; do
  case "$1" in
    --environment) shift 2 ;;
    --name) name="$2"; shift 2 ;;
    --gas) gas="$2"; shift 2 ;;
    --address) address="$2"; shift 2 ;;
    --arg) args="$args $2"; shift 2 ;;
    *) shift ;;
  esac
done

case "$cmd" in
  deploy)
    echo "deploy $name gas=$gas args=[$args ]" >> "$log"
    if [ -e "$here/fail_deploy_$name" ]; then
      echo "rpc node rejected $name" >&2
      exit 1
    fi
    if [ "$gas" = "0" ]; then
      echo "positive gas budget required" >&2
      exit 1
    fi
    printf '{"address": "0x%s", "abi": [{"component": "%s"}]}\n' "$name" "$name"
    ;;
  register)
    echo "register $name $address" >> "$log"
    mkdir -p "$registry"
    printf '%s' "$address" > "$registry/$name"
    ;;
  resolve)
    echo "resolve $name" >> "$log"
    if [ -f "$registry/$name" ]; then
      printf '{"address": "%s"}\n' "$(cat "$registry/$name")"
    else
      printf '{"address": null}\n'
    fi
    ;;
  *)
    echo "unknown command $cmd" >&2
    exit 2
    ;;
esac
"#;
