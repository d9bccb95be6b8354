/// Read-only port-to-service-name mapping consulted during verbose
/// formatting. Injected so tests can supply their own table.
pub trait ServiceTable: Send + Sync {
    fn lookup(&self, port: u16) -> Option<&'static str>;
}

/// Static table of IANA well-known assignments plus a handful of
/// de-facto standards (databases, proxies) every scanner reports.
pub struct WellKnownServices;

impl ServiceTable for WellKnownServices {
    fn lookup(&self, port: u16) -> Option<&'static str> {
        let name = match port {
            7 => "echo",
            9 => "discard",
            13 => "daytime",
            20 => "ftp-data",
            21 => "ftp",
            22 => "ssh",
            23 => "telnet",
            25 => "smtp",
            37 => "time",
            43 => "whois",
            53 => "domain",
            67 => "dhcps",
            68 => "dhcpc",
            69 => "tftp",
            79 => "finger",
            80 => "http",
            88 => "kerberos-sec",
            110 => "pop3",
            111 => "rpcbind",
            113 => "ident",
            119 => "nntp",
            123 => "ntp",
            135 => "msrpc",
            137 => "netbios-ns",
            138 => "netbios-dgm",
            139 => "netbios-ssn",
            143 => "imap",
            161 => "snmp",
            162 => "snmptrap",
            179 => "bgp",
            194 => "irc",
            389 => "ldap",
            427 => "svrloc",
            443 => "https",
            445 => "microsoft-ds",
            465 => "smtps",
            500 => "isakmp",
            513 => "login",
            514 => "syslog",
            515 => "printer",
            543 => "klogin",
            544 => "kshell",
            548 => "afp",
            554 => "rtsp",
            587 => "submission",
            631 => "ipp",
            636 => "ldapssl",
            873 => "rsync",
            902 => "iss-realsecure",
            990 => "ftps",
            993 => "imaps",
            995 => "pop3s",
            1080 => "socks",
            1433 => "ms-sql-s",
            1521 => "oracle",
            1723 => "pptp",
            1883 => "mqtt",
            2049 => "nfs",
            2082 => "cpanel",
            2181 => "zookeeper",
            3128 => "squid-http",
            3268 => "globalcatLDAP",
            3306 => "mysql",
            3389 => "ms-wbt-server",
            5060 => "sip",
            5222 => "xmpp-client",
            5432 => "postgresql",
            5672 => "amqp",
            5900 => "vnc",
            5901 => "vnc-1",
            6379 => "redis",
            6667 => "irc",
            8000 => "http-alt",
            8080 => "http-proxy",
            8443 => "https-alt",
            8888 => "sun-answerbook",
            9092 => "kafka",
            9200 => "wap-wsp",
            11211 => "memcache",
            27017 => "mongod",
            _ => return None,
        };
        Some(name)
    }
}
