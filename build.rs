fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        // Embed the version resource shown in Explorer's file properties
        let _ = embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE);
    }
}
