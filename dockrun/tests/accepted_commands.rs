use dockrun::{parse, RunCommand};

fn parsed(line: &str) -> RunCommand {
    parse(line).unwrap_or_else(|err| panic!("{:?} should parse, got: {}", line, err))
}

#[test]
fn boolean_options_take_explicit_values() {
    let command = parsed("sudo docker run --rm=true -i=true -d=false alpine");
    assert!(command.remove);
    assert!(command.interactive);
    assert!(!command.detach);
    assert_eq!(command.image, "alpine:latest");

    assert!(!parsed("sudo docker run --detach=false alpine").detach);
    assert!(parsed("docker run --tty='true' alpine").tty);
}

#[test]
fn bundled_volume_takes_next_token() {
    let command = parsed("sudo docker run  -itv /dddsss:/workplace   alpine:latest sh -c 'pwd'");
    assert!(command.interactive && command.tty);
    assert_eq!(command.volumes["/dddsss"], "/workplace");
    assert_eq!(command.command.as_deref(), Some("sh"));
    assert_eq!(command.args, vec!["-c", "'pwd'"]);
}

#[test]
fn ports_from_bundles_and_separate_tokens() {
    let command = parsed("sudo docker run -ip 8080:8080 --rm -dp 8383:8333 alpine:latest");
    assert!(command.interactive && command.remove && command.detach);
    assert_eq!(command.ports["8080"], "8080");
    assert_eq!(command.ports["8383"], "8333");

    let command = parsed("docker run -itdp8080:7373  alpine:latest");
    assert!(command.interactive && command.tty && command.detach);
    assert_eq!(command.ports["8080"], "7373");

    let command = parsed("docker run --rm -it -p8080:7373 -p8081:7373  alpine:latest");
    assert_eq!(command.ports.len(), 2);

    let command = parsed("sudo docker run --rm -itPp8080:8080  alpine:latest");
    assert!(command.publish_all);
    assert_eq!(command.ports["8080"], "8080");
}

#[test]
fn attached_hostname() {
    let command = parsed("sudo docker run --rm -it -hubuntu  alpine:latest");
    assert_eq!(command.hostname.as_deref(), Some("ubuntu"));
}

#[test]
fn volume_with_equals_and_pwd() {
    let command = parsed(
        "docker run --detach -v=$PWD/data:/var/lib/postgresql/data kthiinqwrs/1000010021_postgres",
    );
    assert!(command.detach);
    assert_eq!(command.volumes["$PWD/data"], "/var/lib/postgresql/data");
    assert_eq!(command.image, "kthiinqwrs/1000010021_postgres:latest");

    let command = parsed("docker run -v $(pwd)/src/:/app/ alpine");
    assert_eq!(command.volumes["$PWD/src"], "/app");
}

#[test]
fn reference_commands_parse() {
    let references = [
        "docker run --rm -v $PWD:/workspace username/1000010021_angular ng build",
        "docker run -d -v $PWD/data:/var/lib/postgresql/data username/1000010021_postgres",
        "docker run -d -m 1024m -p 8081:8080 username/1000010021_server",
        "docker run -d --name database -v username_vol:/var/lib/postgresql/data username/1000010022_postgres:latest",
        "docker run -d --network netname --name dockername username/1000010023_postgres:latest ",
        "docker run -v $PWD/data:/data --name server1 username/1000010024_server:latest",
        "docker run -t --rm -w /data -v username_vol:/data username/1000010024_server:latest touch hello.txt",
        "docker run -d -w /data --name server3 -v username_vol:/data username/1000010024_server:latest rm hello.txt",
    ];

    for line in references.iter() {
        parsed(line);
    }

    let command = parsed(references[4]);
    assert_eq!(command.network.as_deref(), Some("netname"));
    assert_eq!(command.container_name.as_deref(), Some("dockername"));
    assert_eq!(command.command, None);
    assert!(command.args.is_empty());

    let command = parsed(references[2]);
    assert_eq!(command.memory, Some(1024));
}

#[test]
fn missing_tag_defaults_to_latest() {
    for image in ["alpine", "images", "user/app_1", "ab"].iter() {
        let command = parsed(&format!("docker run {}", image));
        assert_eq!(command.image, format!("{}:latest", image));
    }
    assert_eq!(parsed("docker run alpine:edge").image, "alpine:edge");
}

#[test]
fn quoting_is_transparent_for_names() {
    for line in [
        "docker run --name=hello alpine",
        "docker run --name hello alpine",
        r#"docker run --name="hello" alpine"#,
        "docker run --name='hello' alpine",
        "docker run --name 'hello' alpine",
    ]
    .iter()
    {
        assert_eq!(parsed(line).container_name.as_deref(), Some("hello"), "{}", line);
    }
}

#[test]
fn memory_units() {
    let memory = |value: &str| parsed(&format!("docker run -m {} alpine", value)).memory;
    assert_eq!(memory("1024m"), Some(1024));
    assert_eq!(memory("1g"), Some(1024));
    assert_eq!(memory("1048576b"), Some(1));
    assert_eq!(memory("1024k"), Some(1));
    assert_eq!(memory("2G"), Some(2048));
    assert_eq!(parsed("docker run --memory=512M alpine").memory, Some(512));
}

#[test]
fn cpu_shares_boundaries_are_accepted() {
    assert_eq!(parsed("docker run -c 2 alpine").cpu_shares, Some(2));
    assert_eq!(parsed("docker run --cpu-shares=262144 alpine").cpu_shares, Some(262144));
    assert_eq!(parsed("docker run -c'512' alpine").cpu_shares, Some(512));
}

#[test]
fn repeatable_options_accumulate_in_order() {
    let command = parsed(
        "docker run -e A=1 --env B=2 -l tier=web --label=owner=me -a stdout -aSTDERR --link db:db --link cache alpine",
    );
    assert_eq!(command.env, vec!["A=1", "B=2"]);
    assert_eq!(command.labels, vec!["tier=web", "owner=me"]);
    assert_eq!(command.attach, vec!["stdout", "STDERR"]);
    assert_eq!(command.links, vec!["db:db", "cache"]);
}

#[test]
fn user_and_workdir() {
    let command = parsed(r#"docker run -u 1000:1000 --workdir="/srv/app" alpine"#);
    assert_eq!(command.user.as_deref(), Some("1000:1000"));
    assert_eq!(command.workdir.as_deref(), Some("/srv/app"));
}

#[test]
fn line_continuations_are_joined() {
    let command = parsed("docker run \\\n  --rm \\\n  -p 80:80 \\\n  nginx");
    assert!(command.remove);
    assert_eq!(command.ports["80"], "80");
    assert_eq!(command.image, "nginx:latest");
}

#[test]
fn tokens_after_image_are_never_options() {
    let command = parsed("docker run alpine --rm -p 80:80");
    assert!(!command.remove);
    assert!(command.ports.is_empty());
    assert_eq!(command.command.as_deref(), Some("--rm"));
    assert_eq!(command.args, vec!["-p", "80:80"]);
}

#[test]
fn from_str_matches_parse() {
    let command: RunCommand = "docker run -it alpine".parse().unwrap();
    assert_eq!(command, parsed("docker run -it alpine"));
}
