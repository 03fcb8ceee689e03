use std::process::ExitCode;

use clap::Parser;

use jsbind::{Interface, Literal, MemberKind, Registry, Slot};

#[derive(Parser)]
#[command(name = "jsbind", version, about = "DOM binding table inspector")]
struct Cli {
    /// Interface or member to resolve, e.g. "MouseEvent" or "MouseEvent.initMouseEvent"
    path: Option<String>,

    /// Resolve against a target expression instead of the interface global
    #[arg(short = 't', long = "target")]
    target: Option<String>,

    /// List the declared interfaces
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let registry = match Registry::dom() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error building binding tables: {e}");
            return ExitCode::from(1);
        }
    };

    match cli.path {
        Some(path) if !cli.list => resolve(&registry, &path, cli.target.as_deref()),
        _ => list_interfaces(&registry),
    }
}

fn list_interfaces(registry: &Registry) -> ExitCode {
    let mut interfaces: Vec<_> = registry.iter().collect();
    interfaces.sort_by_key(|iface| iface.name());
    for iface in interfaces {
        println!("{} ({} members)", iface.name(), iface.len());
    }
    ExitCode::SUCCESS
}

fn resolve(registry: &Registry, path: &str, target: Option<&str>) -> ExitCode {
    let (iface_name, member) = match path.split_once('.') {
        Some((iface, member)) => (iface, Some(member)),
        None => (path, None),
    };
    let Some(iface) = registry.get(iface_name) else {
        eprintln!("Unknown interface: {iface_name}");
        return ExitCode::from(1);
    };
    match member {
        Some(name) => resolve_member(iface, name, target),
        None => dump_interface(iface, target),
    }
}

fn dump_interface(iface: &Interface, target: Option<&str>) -> ExitCode {
    println!("{}", iface.name());
    for decl in iface.decls() {
        println!("  {}", describe(iface, decl.name, target));
    }
    ExitCode::SUCCESS
}

fn resolve_member(iface: &Interface, name: &str, target: Option<&str>) -> ExitCode {
    let resolved = match target {
        Some(target) => iface.instance_ref(name).map(|member| member.resolve_on(target)),
        None => iface.static_ref(name).map(|member| member.resolve()),
    };
    match resolved {
        Some(path) => {
            println!("{path}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{} has no member {name:?}", iface.name());
            ExitCode::from(1)
        }
    }
}

fn describe(iface: &Interface, name: &str, target: Option<&str>) -> String {
    let path = match target {
        Some(target) => iface
            .instance_ref(name)
            .map(|member| member.resolve_on(target)),
        None => iface.static_ref(name).map(|member| member.resolve()),
    };
    let path = path.unwrap_or_default();
    match iface.decl(name).map(|decl| (decl.kind, decl.slot)) {
        Some((MemberKind::Const { value }, _)) => {
            format!("const  {path} = {}", Literal::Num(value))
        }
        Some((MemberKind::Field { readonly }, _)) => {
            let access = if readonly { "readonly" } else { "writable" };
            format!("field  {path} ({access})")
        }
        Some((MemberKind::Method { arity }, slot)) => {
            let slot = if slot == Slot::Prototype { " [prototype]" } else { "" };
            format!("method {path}/{arity}{slot}")
        }
        None => path,
    }
}
