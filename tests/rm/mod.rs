mod rm_staged_and_tracked_files;
