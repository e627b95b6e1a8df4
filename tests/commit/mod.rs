mod commit_rejections;
