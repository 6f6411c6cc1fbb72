fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        // Embed the application manifest (common controls v6 for themed dialogs)
        println!("cargo:rerun-if-changed=resources/windows/demo.rc");
        println!("cargo:rerun-if-changed=resources/windows/demo.exe.manifest");
        if let Err(e) =
            embed_resource::compile("resources/windows/demo.rc", embed_resource::NONE)
                .manifest_optional()
        {
            println!("cargo:warning=demo resources not embedded: {}", e);
        }
    }
}
