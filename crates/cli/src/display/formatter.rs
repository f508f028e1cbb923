use svclink_core::{ArtifactPaths, ProjectHandle, ServiceImplementationProject};

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub fn print_resolved_project(resolved: &ServiceImplementationProject) {
    let metadata = &resolved.metadata;
    println!("🔍 Project: {}", resolved.project);
    println!("{}", "=".repeat(80));
    println!("   Service:            {}", or_dash(metadata.service_name.as_deref()));
    println!("   Namespace:          {}", or_dash(metadata.target_namespace.as_deref()));
    println!("   Impl class:         {}", or_dash(metadata.service_impl_class_name.as_deref()));
    println!(
        "   Interface class:    {}",
        or_dash(metadata.service_interface_class_name.as_deref())
    );
    println!("   Consumer sources:   {}", metadata.consumer_base_source_directory);

    if resolved.source_directories.is_empty() {
        println!("\n📂 Source directories: none");
    } else {
        println!("\n📂 Source directories:");
        for directory in &resolved.source_directories {
            println!("   - {}", directory.path());
        }
    }

    let interface = &metadata.interface_metadata;
    if interface.is_empty() {
        println!("\n🔗 Interface: not linked");
    } else {
        println!("\n🔗 Interface: {}", or_dash(interface.project_name.as_deref()));
        println!("   Admin name:         {}", or_dash(interface.admin_name.as_deref()));
        println!("   Namespace:          {}", or_dash(interface.namespace.as_deref()));
        println!("   Version:            {}", or_dash(interface.service_version.as_deref()));
        println!("   Interface class:    {}", or_dash(interface.interface_class_name.as_deref()));
    }
}

pub fn print_artifact_paths(project: &ProjectHandle, artifacts: &ArtifactPaths) {
    println!("📦 Artifacts of {}", project);
    println!("{}", "=".repeat(80));
    for (label, path) in artifacts.entries() {
        println!("   {:<22} {}", label, path);
    }
    if artifacts.war.is_none() {
        println!("\n   (no service name known, war file omitted)");
    }
}

pub fn print_link_summary(name: &str, result: anyhow::Result<ServiceImplementationProject>) {
    match result {
        Ok(resolved) => match (resolved.service_name(), resolved.metadata.is_linked()) {
            (Some(service), true) => println!("🔗 {name} -> {service}"),
            (Some(service), false) => {
                println!("⚠️  {name} -> {service} (interface project unavailable)")
            }
            (None, _) => println!("   {name} (no service)"),
        },
        Err(e) => println!("❌ {name}: {e:#}"),
    }
}
